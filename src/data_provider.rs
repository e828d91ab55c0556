/// Trait for providing NBA feed data, abstracting over the real API client
/// and mock implementations
use async_trait::async_trait;
use nba_api::{GameDate, LiveScores, NbaApiError, ScoreboardResponse};

/// Trait for NBA data providers, implemented by the real Client and by test mocks
#[async_trait]
pub trait NbaDataProvider: Send + Sync {
    /// Get the daily scoreboard for a specific date
    async fn scoreboard(&self, date: GameDate) -> Result<ScoreboardResponse, NbaApiError>;

    /// Get today's live scores
    async fn live_scores(&self) -> Result<LiveScores, NbaApiError>;
}

/// Implement the trait for the real nba_api::Client
#[async_trait]
impl NbaDataProvider for nba_api::Client {
    async fn scoreboard(&self, date: GameDate) -> Result<ScoreboardResponse, NbaApiError> {
        self.scoreboard(date).await
    }

    async fn live_scores(&self) -> Result<LiveScores, NbaApiError> {
        self.live_scores().await
    }
}
