//! Terminal scorekeeper: one command per line on stdin.
//! Run with: cargo run --bin matoate
//! Settings and results are stored in MATOATE_DATA_DIR (default `.matoate`).
//!
//! Commands: `0`-`10` record a throw, `u`/`undo`, `r`/`reset`, `s`/`status`, `q`/`quit`.

use matoate_score::{
    current_turn, overall_totals, route_progress, write_scoreboard_csv, MatchSession, Settings,
    Store, ThrowOutcome,
};
use std::io::{self, BufRead, Write};

fn default_data_dir() -> String {
    ".matoate".to_string()
}

fn print_status(session: &MatchSession, settings: &Settings) {
    let state = session.state();
    let totals = overall_totals(state);
    for (p, name) in state.configuration.player_names().iter().enumerate() {
        let progress = route_progress(i64::from(totals[p]));
        let mode = settings.station_label_mode;
        println!(
            "  {:<12} {:>4} pts  lap {} ({:>3.0}%)  at {} -> {} in {}",
            name,
            totals[p],
            progress.lap,
            progress.lap_fraction * 100.0,
            mode.label(&progress.current_station),
            mode.label(&progress.next_station),
            progress.distance_to_next
        );
    }
    match current_turn(state) {
        Some(turn) => {
            let name = state
                .configuration
                .player_name(turn.player_index)
                .unwrap_or("?");
            if turn.sudden_death {
                println!("Sudden death: {}, throw {}", name, turn.throw_number);
            } else {
                println!(
                    "Set {}/{}: {}, throw {} ({} left)",
                    turn.set_index + 1,
                    state.configuration.set_count(),
                    name,
                    turn.throw_number,
                    turn.remaining_in_set.unwrap_or(0)
                );
            }
        }
        None => println!("Match finished."),
    }
}

fn print_outcome(outcome: &ThrowOutcome) {
    if outcome.completed_lap() {
        println!("Lap complete!");
    } else if outcome.reached_station() {
        println!("Arrived at a station!");
    }
}

fn finish(session: &MatchSession, store: &Store) -> io::Result<()> {
    let Some(record) = store.record_finished_match(session.state()) else {
        return Ok(());
    };
    println!("{}", record);
    if let Err(e) = write_scoreboard_csv(session.state(), io::stdout()) {
        log::warn!("Could not print scoreboard: {}", e);
    }
    println!("Best total: {}", store.load_best_total());
    io::stdout().flush()
}

fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let data_dir = std::env::var("MATOATE_DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let store = Store::new(data_dir);
    let settings = store.load_settings();
    store.save_settings(&settings);

    let configuration = match settings.match_configuration() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            return Ok(());
        }
    };
    if let Some(last) = store.load_last_match() {
        println!("Last match ({}): {}", last.finished_at.format("%Y-%m-%d %H:%M"), last);
    }

    let mut session = MatchSession::new(configuration);
    print_status(&session, &settings);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            "s" | "status" => {}
            "u" | "undo" => {
                if let Err(e) = session.undo() {
                    println!("{}", e);
                }
            }
            "r" | "reset" => session.reset(),
            _ => match command.parse::<u8>() {
                Ok(score) => match session.record_throw(score) {
                    Ok(outcome) => {
                        print_outcome(&outcome);
                        if session.state().is_finished() {
                            finish(&session, &store)?;
                        }
                    }
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Unknown command: {}", command),
            },
        }
        print_status(&session, &settings);
    }
    Ok(())
}
