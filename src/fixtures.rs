//! Deterministic fixture data shared by unit tests and benchmarks.
//!
//! Builders hand out records in each lifecycle state with realistic score
//! lines, so tests never depend on feed access or wall-clock state.
use nba_api::{GameRecord, GameStatus, LiveGame, LiveTeamLine, PERIOD_SLOTS};

fn base_record(id: i64, away: &str, home: &str, status: GameStatus) -> GameRecord {
    GameRecord {
        id,
        status,
        scheduled_time: "7:00 pm ET".to_string(),
        home_abbrev: home.to_string(),
        away_abbrev: away.to_string(),
        home_record: "3-1".to_string(),
        away_record: "2-3".to_string(),
        tv_network: None,
        period: None,
        clock: "0".to_string(),
        home_period_points: [0; PERIOD_SLOTS],
        away_period_points: [0; PERIOD_SLOTS],
        home_total: 0,
        away_total: 0,
    }
}

fn fill_periods(record: &mut GameRecord, away: &[i64], home: &[i64]) {
    record.away_period_points[..away.len()].copy_from_slice(away);
    record.home_period_points[..home.len()].copy_from_slice(home);
    record.away_total = away.iter().sum();
    record.home_total = home.iter().sum();
}

/// A game that has not tipped off: zero period table, -1 totals.
pub fn create_not_started_record(id: i64, away: &str, home: &str) -> GameRecord {
    let mut record = base_record(id, away, home, GameStatus::NotStarted);
    record.home_total = -1;
    record.away_total = -1;
    record
}

/// A game in progress, as constructed before any live update lands.
pub fn create_live_record(id: i64, away: &str, home: &str) -> GameRecord {
    let mut record = base_record(id, away, home, GameStatus::Live);
    record.period = Some("Q1".to_string());
    record.clock = "12:00".to_string();
    record
}

/// A finished regulation game.
pub fn create_final_record(id: i64, away: &str, home: &str) -> GameRecord {
    let mut record = base_record(id, away, home, GameStatus::Final);
    record.period = Some("4".to_string());
    fill_periods(&mut record, &[22, 23, 26, 24], &[25, 21, 24, 26]);
    record
}

/// A finished game that needed two overtimes.
pub fn create_double_overtime_record(id: i64, away: &str, home: &str) -> GameRecord {
    let mut record = base_record(id, away, home, GameStatus::Final);
    record.period = Some("6".to_string());
    fill_periods(
        &mut record,
        &[25, 27, 24, 22, 8, 6],
        &[28, 30, 25, 22, 10, 7],
    );
    record
}

/// A live-feed entry with the given status line and running totals.
pub fn create_live_update(period: &str, clock: &str, home_total: i64, away_total: i64) -> LiveGame {
    LiveGame {
        period_label: period.to_string(),
        clock: clock.to_string(),
        home: live_line(home_total),
        away: live_line(away_total),
    }
}

fn live_line(total: i64) -> LiveTeamLine {
    LiveTeamLine {
        total,
        q1: total / 2,
        q2: total - total / 2,
        ..Default::default()
    }
}

/// A full slate of games in mixed states, as a report-generation input.
pub fn create_slate() -> Vec<GameRecord> {
    let mut televised = create_final_record(1, "ORL", "WAS");
    televised.tv_network = Some("TNT".to_string());

    let mut at_half = create_live_record(3, "MIA", "DEN");
    at_half.period = Some("Halftime".to_string());

    vec![
        televised,
        create_double_overtime_record(2, "IND", "DET"),
        at_half,
        create_live_record(4, "NYK", "CHI"),
        create_not_started_record(5, "BOS", "LAL"),
        create_not_started_record(6, "POR", "SAC"),
    ]
}
