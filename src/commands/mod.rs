pub mod scores;
pub mod scores_format;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use nba_api::GameDate;

/// Parse optional date string to GameDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<GameDate> {
    if let Some(date_str) = date {
        let parsed_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))?;
        Ok(GameDate::new(parsed_date))
    } else {
        Ok(GameDate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_date_valid() {
        let date = parse_game_date(Some("2014-11-03".to_string())).unwrap();
        assert_eq!(date.to_string(), "2014-11-03");
    }

    #[test]
    fn test_parse_game_date_defaults_to_today() {
        let date = parse_game_date(None).unwrap();
        assert_eq!(date, GameDate::today());
    }

    #[test]
    fn test_parse_game_date_malformed() {
        let error = parse_game_date(Some("11/03/2014".to_string())).unwrap_err();
        assert!(error.to_string().contains("YYYY-MM-DD"));
    }
}
