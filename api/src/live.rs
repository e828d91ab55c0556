//! Live-scores feed wire types.
//!
//! The feed nests the day's games under `gs.g`, one entry per scoreboard
//! game in the same order. Each side carries its running total plus all 14
//! period fields; the provider zero-fills periods that have not happened.
use crate::game::PERIOD_SLOTS;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct LiveScores {
    pub gs: LiveGameSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveGameSet {
    #[serde(rename = "g")]
    pub games: Vec<LiveGame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveGame {
    /// Period label: "Q1".."Q4", "OT1".., "Halftime", "Final".
    #[serde(rename = "st", deserialize_with = "display_string")]
    pub period_label: String,
    /// Clock display; the feed sends a string mid-period and a bare 0
    /// at period breaks.
    #[serde(rename = "cl", deserialize_with = "display_string", default)]
    pub clock: String,
    #[serde(rename = "h")]
    pub home: LiveTeamLine,
    #[serde(rename = "v")]
    pub away: LiveTeamLine,
}

/// One side's running score line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveTeamLine {
    #[serde(rename = "s", default)]
    pub total: i64,
    #[serde(default)]
    pub q1: i64,
    #[serde(default)]
    pub q2: i64,
    #[serde(default)]
    pub q3: i64,
    #[serde(default)]
    pub q4: i64,
    #[serde(default)]
    pub ot1: i64,
    #[serde(default)]
    pub ot2: i64,
    #[serde(default)]
    pub ot3: i64,
    #[serde(default)]
    pub ot4: i64,
    #[serde(default)]
    pub ot5: i64,
    #[serde(default)]
    pub ot6: i64,
    #[serde(default)]
    pub ot7: i64,
    #[serde(default)]
    pub ot8: i64,
    #[serde(default)]
    pub ot9: i64,
    #[serde(default)]
    pub ot10: i64,
}

impl LiveTeamLine {
    /// Period values in table order: quarters first, then overtimes.
    pub fn period_points(&self) -> [i64; PERIOD_SLOTS] {
        [
            self.q1, self.q2, self.q3, self.q4, self.ot1, self.ot2, self.ot3, self.ot4, self.ot5,
            self.ot6, self.ot7, self.ot8, self.ot9, self.ot10,
        ]
    }
}

/// Accept a string or a number and keep its display form. The feed is not
/// consistent about which it sends for clock and period fields.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
