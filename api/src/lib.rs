pub mod client;
pub mod error;
pub mod game;
pub mod game_date;
pub mod live;
pub mod scoreboard;

pub use client::Client;
pub use error::NbaApiError;
pub use game::{GameRecord, GameStatus, PERIOD_SLOTS, QUARTERS};
pub use game_date::GameDate;
pub use live::{LiveGame, LiveGameSet, LiveScores, LiveTeamLine};
pub use scoreboard::{decode_scoreboard, GameHeaderRow, LineScoreRow, ScoreboardResponse};
