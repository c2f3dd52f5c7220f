//! Match runner for playing games between two difficulty tiers

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ziffi_core::{Color, Engine};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first tier's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two difficulty tiers
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two tiers
    ///
    /// Returns the result from `tier1`'s perspective
    pub fn run_match<R: Rng + ?Sized>(&self, tier1: u8, tier2: u8, rng: &mut R) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let tier1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if tier1_white {
                play_game(tier1, tier2, rng)
            } else {
                // Flip result since tier1 is black
                play_game(tier2, tier1, rng).flipped()
            };
            result.record(game_result);

            let color = if tier1_white { "W" } else { "B" };
            let outcome = match game_result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            if self.config.verbose {
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
            debug!(game = game_num + 1, outcome, color, "game finished");
        }

        info!(tier1, tier2, wins = result.wins, losses = result.losses, draws = result.draws, "match finished");
        result
    }
}

/// Play a single game from the Ziffi layout, returns result from white's
/// perspective.
///
/// The game ends at the move limit, or earlier when the side to move has no
/// legal move. Either way the material rule decides.
pub fn play_game<R: Rng + ?Sized>(white: u8, black: u8, rng: &mut R) -> GameResult {
    let mut engine = Engine::new();

    while !engine.is_game_over() {
        let side = engine.current_player();
        let tier = if side == Color::White { white } else { black };
        let Some(mv) = engine.get_ai_move_with_rng(side, tier, rng) else {
            debug!(%side, "no legal move, scoring early");
            break;
        };
        if !engine.make_move(mv.from.row, mv.from.col, mv.to.row, mv.to.col, None) {
            break;
        }
    }

    let winner = if engine.is_game_over() {
        engine.winner()
    } else {
        engine.calculate_winner()
    };
    match winner {
        Some(Color::White) => GameResult::Win,
        Some(Color::Black) => GameResult::Loss,
        None => GameResult::Draw,
    }
}

/// Quick utility to run a single match
pub fn quick_match(tier1: u8, tier2: u8, num_games: u32) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(tier1, tier2, &mut rand::thread_rng())
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
