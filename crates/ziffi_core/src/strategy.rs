//! Difficulty tiers for computer-controlled sides.
//!
//! Each tier maps to one [`Strategy`]. A strategy receives the full list of
//! legal moves for the side to play and returns one of them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    board::Board,
    eval::PAWN_VALUE,
    search::{evaluate_move, pick_best_move},
    types::*,
};

/// Chance that the weakest tier plays a uniformly random move.
pub const BLUNDER_CHANCE: f64 = 0.1;
/// Chance that the capture-biased tier restricts itself to captures.
pub const CAPTURE_PREFERENCE: f64 = 0.7;
/// Noise added to the weakest tier's scores, as a fraction of a pawn.
pub const SCORE_JITTER: f64 = 0.2;

/// Search depth used for difficulty values outside 0..=5.
pub const DEFAULT_MINIMAX_DEPTH: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Mostly the best one-ply move with noise, sometimes a random one.
    RandomWeighted,
    /// Prefers captures, otherwise random.
    CaptureBiased,
    /// Best move by a two-ply lookahead.
    GreedyHeuristic,
    /// Alpha-beta minimax to the given depth.
    Minimax(u8),
}

impl Strategy {
    pub fn from_difficulty(difficulty: u8) -> Strategy {
        match difficulty {
            0 => Strategy::RandomWeighted,
            1 => Strategy::CaptureBiased,
            2 => Strategy::GreedyHeuristic,
            3 => Strategy::Minimax(2),
            4 => Strategy::Minimax(3),
            5 => Strategy::Minimax(4),
            _ => Strategy::Minimax(DEFAULT_MINIMAX_DEPTH),
        }
    }

    /// Picks one of `moves` for `player`. `board` is restored before returning.
    pub fn select<R: Rng + ?Sized>(
        self,
        board: &mut Board,
        player: Color,
        moves: &[Move],
        rng: &mut R,
    ) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        match self {
            Strategy::RandomWeighted => random_weighted(board, player, moves, rng),
            Strategy::CaptureBiased => capture_biased(moves, rng),
            Strategy::GreedyHeuristic => greedy(board, player, moves, 2),
            Strategy::Minimax(depth) => pick_best_move(board, player, depth, moves).best_move,
        }
    }
}

fn random_weighted<R: Rng + ?Sized>(
    board: &mut Board,
    player: Color,
    moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    if rng.gen_bool(BLUNDER_CHANCE) {
        return moves.choose(rng).copied();
    }

    let spread = (SCORE_JITTER * PAWN_VALUE as f64) as i32;
    let mut best = moves[0];
    let mut best_score = i32::MIN;
    for &mv in moves {
        let score = evaluate_move(board, mv, player, 1) + rng.gen_range(-spread..=spread);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    Some(best)
}

fn capture_biased<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();
    if !captures.is_empty() && rng.gen_bool(CAPTURE_PREFERENCE) {
        return captures.choose(rng).copied();
    }
    moves.choose(rng).copied()
}

fn greedy(board: &mut Board, player: Color, moves: &[Move], depth: u8) -> Option<Move> {
    let mut best = moves[0];
    let mut best_score = i32::MIN;
    for &mv in moves {
        let score = evaluate_move(board, mv, player, depth);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    Some(best)
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
