//! Scoreboard feed wire types and positional decoding.
//!
//! The feed envelope is a list of named result sets whose rows are plain
//! JSON arrays indexed by position. Every positional read in the crate
//! goes through the column tables and checked accessors here, so the
//! "magic index" coupling to the feed layout lives in one place.
use crate::error::NbaApiError;
use crate::game::{GameRecord, GameStatus, PERIOD_SLOTS, QUARTERS};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardResponse {
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

const GAME_HEADER_SET: &str = "GameHeader";
const LINE_SCORE_SET: &str = "LineScore";

/// Column offsets in `GameHeader` rows, named after the feed's headers.
mod game_header {
    pub const GAME_SEQUENCE: usize = 1;
    pub const GAME_STATUS_ID: usize = 3;
    pub const GAME_STATUS_TEXT: usize = 4;
    pub const LIVE_PERIOD: usize = 9;
    pub const NATL_TV_BROADCASTER: usize = 11;
}

/// Column offsets in `LineScore` rows. The period block is contiguous:
/// four quarters from `PTS_QTR1`, then ten overtimes from `PTS_OT1`.
mod line_score {
    pub const TEAM_ABBREVIATION: usize = 4;
    pub const TEAM_WINS_LOSSES: usize = 6;
    pub const PTS_QTR1: usize = 7;
    pub const PTS: usize = 21;
}

/// A `GameHeader` row decoded to named fields.
#[derive(Debug, Clone)]
pub struct GameHeaderRow {
    pub game_id: i64,
    pub status: GameStatus,
    /// Status display string; the scheduled start time before tip-off.
    pub status_text: String,
    pub live_period: String,
    pub broadcaster: Option<String>,
}

/// A `LineScore` row decoded to named fields. Period points and total are
/// only read from the feed for finished games; otherwise they stay zero.
#[derive(Debug, Clone)]
pub struct LineScoreRow {
    pub abbreviation: String,
    pub wins_losses: String,
    pub period_points: [i64; PERIOD_SLOTS],
    pub total: i64,
}

/// Decode the whole scoreboard: one record per `GameHeader` row, paired
/// with its two adjacent `LineScore` rows (away first, home second).
pub fn decode_scoreboard(response: &ScoreboardResponse) -> Result<Vec<GameRecord>, NbaApiError> {
    let games = result_set(response, GAME_HEADER_SET)?;
    let teams = result_set(response, LINE_SCORE_SET)?;

    let mut records = Vec::with_capacity(games.row_set.len());
    for (index, game_row) in games.row_set.iter().enumerate() {
        let header = decode_game_header(game_row)?;
        let away_row = teams.row_set.get(2 * index).ok_or_else(|| {
            NbaApiError::Shape(format!(
                "{LINE_SCORE_SET} has no away row for game {}",
                header.game_id
            ))
        })?;
        let home_row = teams.row_set.get(2 * index + 1).ok_or_else(|| {
            NbaApiError::Shape(format!(
                "{LINE_SCORE_SET} has no home row for game {}",
                header.game_id
            ))
        })?;

        let away = decode_line_score(away_row, header.status)?;
        let home = decode_line_score(home_row, header.status)?;
        records.push(GameRecord::from_feed_rows(&header, &away, &home));
    }

    Ok(records)
}

pub fn decode_game_header(row: &[Value]) -> Result<GameHeaderRow, NbaApiError> {
    let status_code = int_field(row, GAME_HEADER_SET, "GAME_STATUS_ID", game_header::GAME_STATUS_ID)?;

    Ok(GameHeaderRow {
        game_id: int_field(row, GAME_HEADER_SET, "GAME_SEQUENCE", game_header::GAME_SEQUENCE)?,
        status: GameStatus::from_feed(status_code)?,
        status_text: string_field(
            row,
            GAME_HEADER_SET,
            "GAME_STATUS_TEXT",
            game_header::GAME_STATUS_TEXT,
        )?,
        live_period: display_field(row, GAME_HEADER_SET, "LIVE_PERIOD", game_header::LIVE_PERIOD)?,
        broadcaster: optional_string_field(
            row,
            GAME_HEADER_SET,
            "NATL_TV_BROADCASTER",
            game_header::NATL_TV_BROADCASTER,
        )?,
    })
}

pub fn decode_line_score(row: &[Value], status: GameStatus) -> Result<LineScoreRow, NbaApiError> {
    let mut line = LineScoreRow {
        abbreviation: string_field(
            row,
            LINE_SCORE_SET,
            "TEAM_ABBREVIATION",
            line_score::TEAM_ABBREVIATION,
        )?,
        wins_losses: string_field(
            row,
            LINE_SCORE_SET,
            "TEAM_WINS_LOSSES",
            line_score::TEAM_WINS_LOSSES,
        )?,
        period_points: [0; PERIOD_SLOTS],
        total: 0,
    };

    // The feed leaves point columns null until the game finishes; only
    // finished games read the period block.
    if status == GameStatus::Final {
        for slot in 0..PERIOD_SLOTS {
            let column = if slot < QUARTERS {
                format!("PTS_QTR{}", slot + 1)
            } else {
                format!("PTS_OT{}", slot - QUARTERS + 1)
            };
            line.period_points[slot] =
                int_field(row, LINE_SCORE_SET, &column, line_score::PTS_QTR1 + slot)?;
        }
        line.total = int_field(row, LINE_SCORE_SET, "PTS", line_score::PTS)?;
    }

    Ok(line)
}

fn result_set<'a>(
    response: &'a ScoreboardResponse,
    name: &str,
) -> Result<&'a ResultSet, NbaApiError> {
    response
        .result_sets
        .iter()
        .find(|set| set.name == name)
        .ok_or_else(|| NbaApiError::Shape(format!("scoreboard response has no {name} result set")))
}

fn field<'a>(
    row: &'a [Value],
    set: &str,
    column: &str,
    index: usize,
) -> Result<&'a Value, NbaApiError> {
    row.get(index).ok_or_else(|| {
        NbaApiError::Shape(format!("{set} row too short: missing {column} at index {index}"))
    })
}

fn int_field(row: &[Value], set: &str, column: &str, index: usize) -> Result<i64, NbaApiError> {
    field(row, set, column, index)?.as_i64().ok_or_else(|| {
        NbaApiError::Shape(format!("{set} {column} at index {index} is not an integer"))
    })
}

fn string_field(row: &[Value], set: &str, column: &str, index: usize) -> Result<String, NbaApiError> {
    field(row, set, column, index)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| {
            NbaApiError::Shape(format!("{set} {column} at index {index} is not a string"))
        })
}

fn optional_string_field(
    row: &[Value],
    set: &str,
    column: &str,
    index: usize,
) -> Result<Option<String>, NbaApiError> {
    match field(row, set, column, index)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(NbaApiError::Shape(format!(
            "{set} {column} at index {index} is not a string or null"
        ))),
    }
}

/// Accept a string or a number and keep its display form.
fn display_field(row: &[Value], set: &str, column: &str, index: usize) -> Result<String, NbaApiError> {
    match field(row, set, column, index)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(NbaApiError::Shape(format!(
            "{set} {column} at index {index} is not a string or number"
        ))),
    }
}
