use crate::error::NbaApiError;
use crate::game_date::GameDate;
use crate::live::LiveScores;
use crate::scoreboard::ScoreboardResponse;
use serde::de::DeserializeOwned;
use std::time::Duration;

const STATS_BASE: &str = "https://stats.nba.com";
const DATA_BASE: &str = "https://data.nba.com";

const SCOREBOARD_PATH: &str = "/stats/scoreboardV2";
const LIVE_SCORES_PATH: &str = "/data/v2015/json/mobile_teams/nba/scores/00_todays_scores.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("nba/", env!("CARGO_PKG_VERSION"), " (terminal scoreboard)");

/// HTTP client for the scoreboard and live-scores feeds.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    stats_base: String,
    data_base: String,
}

impl Client {
    pub fn new() -> Result<Self, NbaApiError> {
        Self::with_base_urls(STATS_BASE.to_string(), DATA_BASE.to_string())
    }

    /// Build a client against alternate feed hosts. Tests point this at a
    /// local mock server.
    pub fn with_base_urls(stats_base: String, data_base: String) -> Result<Self, NbaApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NbaApiError::Client)?;

        Ok(Client {
            http,
            stats_base,
            data_base,
        })
    }

    /// Fetch the daily scoreboard for a date.
    pub async fn scoreboard(&self, date: GameDate) -> Result<ScoreboardResponse, NbaApiError> {
        let url = format!(
            "{}{}?DayOffset=0&LeagueID=00&GameDate={}",
            self.stats_base,
            SCOREBOARD_PATH,
            date.to_query_string().replace('/', "%2F"),
        );
        self.get(&url).await
    }

    /// Fetch today's live scores.
    pub async fn live_scores(&self) -> Result<LiveScores, NbaApiError> {
        let url = format!("{}{}", self.data_base, LIVE_SCORES_PATH);
        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, NbaApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| NbaApiError::Network {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NbaApiError::Status {
                url: url.to_owned(),
                status,
            });
        }

        response.json::<T>().await.map_err(|e| NbaApiError::Parse {
            url: url.to_owned(),
            source: e,
        })
    }
}
