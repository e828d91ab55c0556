use chrono::{Local, NaiveDate};
use std::fmt;

/// The date a scoreboard report is generated for.
///
/// Carried explicitly through the fetch and decision layers instead of
/// re-reading the wall clock, so date-dependent behavior stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDate(NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        GameDate(date)
    }

    pub fn today() -> Self {
        GameDate(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Format for the scoreboard endpoint's `GameDate` query parameter
    /// (MM/DD/YYYY, slashes escaped by the caller).
    pub fn to_query_string(&self) -> String {
        self.0.format("%m/%d/%Y").to_string()
    }
}

impl From<NaiveDate> for GameDate {
    fn from(date: NaiveDate) -> Self {
        GameDate(date)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_month_first_with_slashes() {
        let date = GameDate::new(NaiveDate::from_ymd_opt(1992, 1, 7).unwrap());
        assert_eq!(date.to_query_string(), "01/07/1992");
    }

    #[test]
    fn display_is_iso() {
        let date = GameDate::new(NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());
        assert_eq!(date.to_string(), "2024-11-03");
    }
}
