//! Score to route position.

use crate::models::{Route, RouteProgress};

/// Position of `score` on the reference route (7 stations, 15 points apart).
pub fn route_progress(score: i64) -> RouteProgress {
    Route::default().progress(score)
}

impl Route<'_> {
    /// Map a total score to a position on this route. Negative scores count as 0.
    ///
    /// A lap covers `1..=lap_length`: an exact multiple of the lap length sits on the
    /// last station with the lap complete, and the next point starts lap + 1 at the
    /// first station.
    pub fn progress(&self, score: i64) -> RouteProgress {
        let stations = self.stations();
        let step = u64::from(self.step());
        let lap_length = u64::from(self.lap_length());
        let last = stations.len() - 1;

        let score = score.max(0) as u64;
        let lap = if score == 0 { 1 } else { (score - 1) / lap_length + 1 };
        let position_in_lap = if score > 0 { score - (lap - 1) * lap_length } else { 0 };

        let station_index = ((position_in_lap / step) as usize).min(last);
        let at_lap_end = position_in_lap >= lap_length;
        let next_station = if at_lap_end {
            stations[0]
        } else {
            stations[(station_index + 1).min(last)]
        };
        let remainder = position_in_lap % step;
        let distance_to_next = if at_lap_end {
            0
        } else if remainder == 0 {
            step
        } else {
            step - remainder
        };

        RouteProgress {
            lap,
            position_in_lap: position_in_lap as u32,
            station_index,
            current_station: stations[station_index],
            next_station,
            distance_to_next: distance_to_next as u32,
            lap_fraction: (position_in_lap as f64 / lap_length as f64).min(1.0),
            lap_just_completed: score > 0 && score % lap_length == 0,
        }
    }
}
