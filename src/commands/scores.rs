use crate::commands::parse_game_date;
use crate::commands::scores_format::format_game;
use crate::data_provider::NbaDataProvider;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use nba_api::{decode_scoreboard, GameRecord, GameStatus, LiveScores};

/// Width of the day header separator line
const HEADER_SEPARATOR_WIDTH: usize = 34;

pub async fn run(client: &dyn NbaDataProvider, date: Option<String>) -> Result<()> {
    let game_date = parse_game_date(date)?;

    tracing::debug!("fetching scoreboard for {}", game_date);
    let response = client
        .scoreboard(game_date)
        .await
        .context("Failed to fetch scoreboard")?;
    let mut games = decode_scoreboard(&response).context("Failed to decode scoreboard")?;

    // Display header
    println!("\n{}", "═".repeat(HEADER_SEPARATOR_WIDTH));
    println!("NBA SCORES - {}", game_date);
    println!("{}\n", "═".repeat(HEADER_SEPARATOR_WIDTH));

    if games.is_empty() {
        println!("No games scheduled for this date.\n");
        return Ok(());
    }

    if should_fetch_live_scores(games[0].status, game_date.date(), Local::now().date_naive()) {
        tracing::debug!("first game has started, fetching live scores");
        let live = client
            .live_scores()
            .await
            .context("Failed to fetch live scores")?;
        merge_live_scores(&mut games, &live);
    }

    for (i, game) in games.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_game(game));
    }

    println!();

    Ok(())
}

/// Decide from the day's first game whether the live feed is worth
/// fetching. A finished first game still means live data for today's
/// report: later games on the slate may be in progress.
fn should_fetch_live_scores(
    first_game_status: GameStatus,
    report_date: NaiveDate,
    today: NaiveDate,
) -> bool {
    match first_game_status {
        GameStatus::NotStarted => false,
        GameStatus::Live => true,
        GameStatus::Final => report_date == today,
    }
}

/// Pair live-feed entries with the slate by position. The merge itself is
/// a no-op for anything not in progress.
fn merge_live_scores(games: &mut [GameRecord], live: &LiveScores) {
    if live.gs.games.len() < games.len() {
        tracing::warn!(
            "live feed has {} entries for {} scheduled games",
            live.gs.games.len(),
            games.len()
        );
    }

    for (game, update) in games.iter_mut().zip(live.gs.games.iter()) {
        game.apply_live_update(update);
    }
}
