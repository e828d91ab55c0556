//! Fixed-width rendering of a game record.
//!
//! Every game renders as two centered lines (matchup, status) and, once
//! play has started, a three-row period table whose column count follows
//! the overtimes actually played.
use nba_api::{GameRecord, GameStatus, QUARTERS};

// Layout Constants
/// Width of the centered matchup and status lines
const REPORT_WIDTH: usize = 34;

/// Width of the team abbreviation column in the period table
const TEAM_ABBREV_COL_WIDTH: usize = 5;

/// Width of each period column
const PERIOD_COL_WIDTH: usize = 5;

/// Width of the trailing total column
const TOTAL_COL_WIDTH: usize = 7;

/// Header label of the total column
const TOTAL_LABEL: &str = "FINAL";

/// Period column labels in slot order
const PERIOD_LABELS: [&str; 14] = [
    "Q1", "Q2", "Q3", "Q4", "OT1", "OT2", "OT3", "OT4", "OT5", "OT6", "OT7", "OT8", "OT9", "OT10",
];

/// Render one game as a multi-line report. Scheduled games get the two
/// header lines only; started games get the period table as well.
pub fn format_game(game: &GameRecord) -> String {
    let matchup = format!(
        "{} ({})   at   {} ({})",
        game.away_abbrev, game.away_record, game.home_abbrev, game.home_record
    );
    let status = format!("{}{}", status_text(game), broadcast_suffix(game));

    let mut output = format!(
        "{:^width$}\n{:^width$}\n",
        matchup,
        status,
        width = REPORT_WIDTH
    );

    if game.status != GameStatus::NotStarted {
        output.push_str(&build_period_table(game));
    }

    output
}

/// Human-readable game status: the tip-off time before the game, the
/// clock-and-period text during it, "Final" after it.
fn status_text(game: &GameRecord) -> String {
    match game.status {
        GameStatus::NotStarted => game.scheduled_time.clone(),
        GameStatus::Live => {
            let period = game.period.as_deref().unwrap_or_default();
            // Halftime and Final carry no clock worth showing.
            if period == "Halftime" || period == "Final" {
                period.to_string()
            } else {
                format!("{} remaining in {}", game.clock, period)
            }
        }
        GameStatus::Final => "Final".to_string(),
    }
}

fn broadcast_suffix(game: &GameRecord) -> String {
    match &game.tv_network {
        Some(network) => format!(" on {}", network),
        None => String::new(),
    }
}

/// Build the three-row period table: label header, home row, away row.
fn build_period_table(game: &GameRecord) -> String {
    let columns = QUARTERS + game.overtimes_played();

    let mut header = " ".repeat(TEAM_ABBREV_COL_WIDTH);
    let mut home_row = format!("{:>width$}", game.home_abbrev, width = TEAM_ABBREV_COL_WIDTH);
    let mut away_row = format!("{:>width$}", game.away_abbrev, width = TEAM_ABBREV_COL_WIDTH);

    for period in 0..columns {
        header.push_str(&format!(
            "{:>width$}",
            PERIOD_LABELS[period],
            width = PERIOD_COL_WIDTH
        ));
        home_row.push_str(&format!(
            "{:>width$}",
            game.home_period_points[period],
            width = PERIOD_COL_WIDTH
        ));
        away_row.push_str(&format!(
            "{:>width$}",
            game.away_period_points[period],
            width = PERIOD_COL_WIDTH
        ));
    }

    header.push_str(&format!("{:>width$}", TOTAL_LABEL, width = TOTAL_COL_WIDTH));
    home_row.push_str(&format!("{:>width$}", game.home_total, width = TOTAL_COL_WIDTH));
    away_row.push_str(&format!("{:>width$}", game.away_total, width = TOTAL_COL_WIDTH));

    format!("{}\n{}\n{}\n", header, home_row, away_row)
}
