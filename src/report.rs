//! Scoreboard export.

use crate::logic::{overall_total, set_totals, sudden_death_total};
use crate::models::MatchState;
use std::io;

/// Write one CSV row per player: name, each set total, sudden-death total, overall total.
pub fn write_scoreboard_csv<W: io::Write>(state: &MatchState, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["player".to_string()];
    header.extend((1..=state.configuration.set_count()).map(|s| format!("set_{}", s)));
    header.push("sudden_death".to_string());
    header.push("total".to_string());
    wtr.write_record(&header)?;

    for (p, name) in state.configuration.player_names().iter().enumerate() {
        let mut row = vec![name.clone()];
        row.extend(set_totals(state, p).iter().map(u32::to_string));
        row.push(sudden_death_total(state, p).to_string());
        row.push(overall_total(state, p).to_string());
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
