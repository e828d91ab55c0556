use crate::error::NbaApiError;
use crate::live::LiveGame;
use crate::scoreboard::{GameHeaderRow, LineScoreRow};

/// Slots in a period-points table: four quarters plus up to ten overtimes.
pub const PERIOD_SLOTS: usize = 14;

/// Regulation quarters; overtime slots start at this index.
pub const QUARTERS: usize = 4;

/// Lifecycle phase of a game, as coded in the scoreboard feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted = 1,
    Live = 2,
    Final = 3,
}

impl GameStatus {
    pub fn from_feed(code: i64) -> Result<Self, NbaApiError> {
        match code {
            1 => Ok(GameStatus::NotStarted),
            2 => Ok(GameStatus::Live),
            3 => Ok(GameStatus::Final),
            other => Err(NbaApiError::Shape(format!(
                "unknown game status code {other}"
            ))),
        }
    }
}

/// Normalized state of one game, built from a game-header row and the two
/// adjacent line-score rows, then optionally updated once from the live
/// feed while the game is in progress.
///
/// Totals are -1 ("not yet determined") only before tip-off; a live game
/// carries 0 totals until its live update lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: i64,
    pub status: GameStatus,
    /// Scheduled start display string, e.g. "7:00 pm ET".
    pub scheduled_time: String,
    pub home_abbrev: String,
    pub away_abbrev: String,
    pub home_record: String,
    pub away_record: String,
    /// National broadcaster; None when not televised.
    pub tv_network: Option<String>,
    /// Current or last period label ("Q3", "Halftime", "Final"); None
    /// before the game starts.
    pub period: Option<String>,
    /// Clock display for the current period; only meaningful while live.
    pub clock: String,
    /// Quarters at 0..3, overtimes at 4..13; unplayed slots stay 0.
    pub home_period_points: [i64; PERIOD_SLOTS],
    pub away_period_points: [i64; PERIOD_SLOTS],
    pub home_total: i64,
    pub away_total: i64,
}

impl GameRecord {
    /// Build a record from decoded feed rows. Field population depends on
    /// the status the feed reports: finished games carry their full period
    /// table, scheduled games carry the -1 unknown-total sentinel, and
    /// live games stay zeroed until `apply_live_update`.
    pub fn from_feed_rows(game: &GameHeaderRow, away: &LineScoreRow, home: &LineScoreRow) -> Self {
        let mut record = GameRecord {
            id: game.game_id,
            status: game.status,
            scheduled_time: game.status_text.clone(),
            home_abbrev: home.abbreviation.clone(),
            away_abbrev: away.abbreviation.clone(),
            home_record: home.wins_losses.clone(),
            away_record: away.wins_losses.clone(),
            tv_network: game.broadcaster.clone(),
            period: match game.status {
                GameStatus::NotStarted => None,
                _ => Some(game.live_period.clone()),
            },
            clock: "0".to_string(),
            home_period_points: [0; PERIOD_SLOTS],
            away_period_points: [0; PERIOD_SLOTS],
            home_total: 0,
            away_total: 0,
        };

        match record.status {
            GameStatus::Final => {
                record.home_period_points = home.period_points;
                record.away_period_points = away.period_points;
                record.home_total = home.total;
                record.away_total = away.total;
            }
            GameStatus::NotStarted => {
                record.home_total = -1;
                record.away_total = -1;
            }
            // Totals and periods arrive with the live update.
            GameStatus::Live => {}
        }

        record
    }

    /// Merge a live-feed entry into this record. No-op unless the game is
    /// in progress; idempotent for identical input.
    pub fn apply_live_update(&mut self, live: &LiveGame) {
        if self.status != GameStatus::Live {
            return;
        }

        self.period = Some(live.period_label.clone());
        self.clock = live.clock.clone();
        self.home_total = live.home.total;
        self.away_total = live.away.total;
        self.home_period_points = live.home.period_points();
        self.away_period_points = live.away.period_points();
    }

    /// Number of overtimes with activity: the offset of the first overtime
    /// slot where the home side scored nothing. A zero slot means that
    /// overtime (and any after it) did not occur; 0 when every slot is
    /// non-zero.
    pub fn overtimes_played(&self) -> usize {
        self.home_period_points[QUARTERS..]
            .iter()
            .position(|&points| points == 0)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::LiveTeamLine;

    fn header_row(status: GameStatus) -> GameHeaderRow {
        GameHeaderRow {
            game_id: 1,
            status,
            status_text: "7:00 pm ET".to_string(),
            live_period: "0".to_string(),
            broadcaster: None,
        }
    }

    fn line_score_row(abbrev: &str, quarters: [i64; 4], overtimes: &[i64], total: i64) -> LineScoreRow {
        let mut period_points = [0; PERIOD_SLOTS];
        period_points[..QUARTERS].copy_from_slice(&quarters);
        period_points[QUARTERS..QUARTERS + overtimes.len()].copy_from_slice(overtimes);
        LineScoreRow {
            abbreviation: abbrev.to_string(),
            wins_losses: "20-15".to_string(),
            period_points,
            total,
        }
    }

    fn live_update(home_total: i64, away_total: i64) -> LiveGame {
        LiveGame {
            period_label: "Q3".to_string(),
            clock: "7:32".to_string(),
            home: LiveTeamLine {
                total: home_total,
                q1: 28,
                q2: 30,
                q3: 12,
                ..Default::default()
            },
            away: LiveTeamLine {
                total: away_total,
                q1: 25,
                q2: 27,
                q3: 11,
                ..Default::default()
            },
        }
    }

    #[test]
    fn not_started_record_is_zeroed_with_sentinel_totals() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::NotStarted),
            &line_score_row("BOS", [0; 4], &[], 0),
            &line_score_row("LAL", [0; 4], &[], 0),
        );

        assert_eq!(record.home_total, -1);
        assert_eq!(record.away_total, -1);
        assert_eq!(record.home_period_points, [0; PERIOD_SLOTS]);
        assert_eq!(record.away_period_points, [0; PERIOD_SLOTS]);
        assert!(record.period.is_none());
    }

    #[test]
    fn final_record_carries_feed_periods_and_totals() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Final),
            &line_score_row("NYK", [25, 27, 24, 22], &[], 98),
            &line_score_row("CHI", [28, 30, 25, 22], &[], 105),
        );

        assert_eq!(record.home_total, 105);
        assert_eq!(record.away_total, 98);
        assert_eq!(record.home_period_points[..4], [28, 30, 25, 22]);
        assert_eq!(
            record.home_period_points[..4].iter().sum::<i64>(),
            record.home_total
        );
        assert_eq!(
            record.away_period_points[..4].iter().sum::<i64>(),
            record.away_total
        );
    }

    #[test]
    fn live_record_constructs_with_zero_totals_not_sentinel() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Live),
            &line_score_row("MIA", [0; 4], &[], 0),
            &line_score_row("DEN", [0; 4], &[], 0),
        );

        assert_eq!(record.home_total, 0);
        assert_eq!(record.away_total, 0);
        assert_eq!(record.home_period_points, [0; PERIOD_SLOTS]);
    }

    #[test]
    fn live_update_overwrites_period_clock_and_scores() {
        let mut record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Live),
            &line_score_row("MIA", [0; 4], &[], 0),
            &line_score_row("DEN", [0; 4], &[], 0),
        );

        record.apply_live_update(&live_update(70, 63));

        assert_eq!(record.period.as_deref(), Some("Q3"));
        assert_eq!(record.clock, "7:32");
        assert_eq!(record.home_total, 70);
        assert_eq!(record.away_total, 63);
        assert_eq!(record.home_period_points[..3], [28, 30, 12]);
    }

    #[test]
    fn live_update_is_idempotent() {
        let mut record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Live),
            &line_score_row("MIA", [0; 4], &[], 0),
            &line_score_row("DEN", [0; 4], &[], 0),
        );

        record.apply_live_update(&live_update(70, 63));
        let after_first = record.clone();
        record.apply_live_update(&live_update(70, 63));

        assert_eq!(record, after_first);
    }

    #[test]
    fn live_update_does_not_touch_finished_or_scheduled_games() {
        let mut final_record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Final),
            &line_score_row("NYK", [25, 27, 24, 22], &[], 98),
            &line_score_row("CHI", [28, 30, 25, 22], &[], 105),
        );
        let before = final_record.clone();
        final_record.apply_live_update(&live_update(70, 63));
        assert_eq!(final_record, before);

        let mut scheduled = GameRecord::from_feed_rows(
            &header_row(GameStatus::NotStarted),
            &line_score_row("BOS", [0; 4], &[], 0),
            &line_score_row("LAL", [0; 4], &[], 0),
        );
        let before = scheduled.clone();
        scheduled.apply_live_update(&live_update(70, 63));
        assert_eq!(scheduled, before);
    }

    #[test]
    fn overtime_count_is_first_unused_slot() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Final),
            &line_score_row("IND", [25, 27, 24, 22], &[8, 6], 112),
            &line_score_row("DET", [28, 30, 25, 22], &[10, 7], 122),
        );

        assert_eq!(record.overtimes_played(), 2);
        // Idempotent: pure read of the period table.
        assert_eq!(record.overtimes_played(), 2);
    }

    #[test]
    fn overtime_count_is_zero_for_regulation_games() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Final),
            &line_score_row("NYK", [25, 27, 24, 22], &[], 98),
            &line_score_row("CHI", [28, 30, 25, 22], &[], 105),
        );
        assert_eq!(record.overtimes_played(), 0);
    }

    #[test]
    fn overtime_count_falls_back_to_zero_when_every_slot_is_used() {
        let record = GameRecord::from_feed_rows(
            &header_row(GameStatus::Final),
            &line_score_row("IND", [25, 27, 24, 22], &[5; 10], 148),
            &line_score_row("DET", [28, 30, 25, 22], &[5; 10], 155),
        );
        assert_eq!(record.overtimes_played(), 0);
    }

    #[test]
    fn status_code_decoding() {
        assert_eq!(GameStatus::from_feed(1).unwrap(), GameStatus::NotStarted);
        assert_eq!(GameStatus::from_feed(2).unwrap(), GameStatus::Live);
        assert_eq!(GameStatus::from_feed(3).unwrap(), GameStatus::Final);
        assert!(GameStatus::from_feed(0).is_err());
        assert!(GameStatus::from_feed(7).is_err());
    }
}
