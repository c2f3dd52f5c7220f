//! Rules, search and difficulty tiers for Ziffi Chess, a 6+6 move variant
//! played on the central files of a regular board.

pub mod attacks;
pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod scoring;
pub mod search;
pub mod strategy;
pub mod types;

pub use attacks::is_in_check;
pub use board::*;
pub use eval::{evaluate, piece_value};
pub use game::{Engine, GameState, MoveRecord};
pub use movegen::*;
pub use scoring::*;
pub use search::{SearchResult, evaluate_move, pick_best_move};
pub use strategy::Strategy;
pub use types::*;
