//! Integration tests for the score-to-route mapping.

use matoate_score::{route_progress, Route, Station, StationLabelMode, LAP_GOAL, STATIONS};

#[test]
fn zero_sits_at_first_station() {
    let p = route_progress(0);
    assert_eq!(p.lap, 1);
    assert_eq!(p.position_in_lap, 0);
    assert_eq!(p.current_station, STATIONS[0]);
    assert_eq!(p.next_station, STATIONS[1]);
    assert_eq!(p.distance_to_next, 15);
    assert_eq!(p.lap_fraction, 0.0);
    assert!(!p.lap_just_completed);
}

#[test]
fn negative_scores_count_as_zero() {
    assert_eq!(route_progress(-5), route_progress(0));
}

#[test]
fn station_boundaries() {
    let p = route_progress(14);
    assert_eq!(p.current_station, STATIONS[0]);
    assert_eq!(p.distance_to_next, 1);

    let p = route_progress(15);
    assert_eq!(p.current_station.kanji, "上野");
    assert_eq!(p.next_station, STATIONS[2]);
    assert_eq!(p.distance_to_next, 15);

    let p = route_progress(89);
    assert_eq!(p.station_index, 5);
    assert_eq!(p.next_station, STATIONS[6]);
    assert_eq!(p.distance_to_next, 1);
}

#[test]
fn lap_completes_at_multiples_of_ninety() {
    assert_eq!(LAP_GOAL, 90);

    let p = route_progress(90);
    assert_eq!(p.lap, 1);
    assert_eq!(p.position_in_lap, 90);
    assert!(p.lap_just_completed);
    assert_eq!(p.current_station, STATIONS[6]);
    assert_eq!(p.next_station, STATIONS[0]);
    assert_eq!(p.distance_to_next, 0);
    assert_eq!(p.lap_fraction, 1.0);

    let p = route_progress(91);
    assert_eq!(p.lap, 2);
    assert_eq!(p.position_in_lap, 1);
    assert_eq!(p.current_station, STATIONS[0]);
    assert_eq!(p.distance_to_next, 14);
    assert!(!p.lap_just_completed);

    let p = route_progress(180);
    assert_eq!(p.lap, 2);
    assert!(p.lap_just_completed);
}

#[test]
fn progress_never_goes_backwards_within_a_lap() {
    for s in 0..400i64 {
        let here = route_progress(s);
        let next = route_progress(s + 1);
        if s > 0 && s % 90 == 0 {
            assert_eq!(next.lap, here.lap + 1, "score {s}");
            assert!(next.lap_fraction < here.lap_fraction, "score {s}");
        } else {
            assert!(next.lap_fraction > here.lap_fraction, "score {s}");
        }
    }
}

#[test]
fn custom_route() {
    const LINE: [Station; 3] = [
        Station { kanji: "甲", kana: "こう" },
        Station { kanji: "乙", kana: "おつ" },
        Station { kanji: "丙", kana: "へい" },
    ];
    let route = Route::new(&LINE, 10).unwrap();
    assert_eq!(route.lap_length(), 20);
    let p = route.progress(25);
    assert_eq!(p.lap, 2);
    assert_eq!(p.current_station, LINE[0]);
    assert_eq!(p.distance_to_next, 5);

    assert!(Route::new(&LINE[..1], 10).is_none());
    assert!(Route::new(&LINE, 0).is_none());
}

#[test]
fn station_labels_follow_mode() {
    let tokyo = &STATIONS[0];
    assert_eq!(StationLabelMode::Kana.label(tokyo), "とうきょう");
    assert_eq!(StationLabelMode::Kanji.label(tokyo), "東京");
    assert_eq!(StationLabelMode::Both.label(tokyo), "とうきょう / 東京");
}

#[test]
fn oversized_step_is_rejected() {
    assert!(Route::new(&STATIONS, u32::MAX / 2).is_none());

    let widest = u32::MAX / 6;
    let route = Route::new(&STATIONS, widest).unwrap();
    assert_eq!(route.lap_length(), widest * 6);
    let p = route.progress(10);
    assert_eq!(p.lap, 1);
    assert_eq!(p.current_station, STATIONS[0]);
    assert_eq!(p.distance_to_next, widest - 10);
}

#[test]
fn huge_scores_keep_the_full_lap_number() {
    let p = route_progress(i64::MAX);
    assert_eq!(p.lap, (i64::MAX as u64 - 1) / 90 + 1);
    assert!(p.position_in_lap >= 1 && p.position_in_lap <= 90);
}
