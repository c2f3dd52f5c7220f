//! Game session controller for Ziffi Chess
//!
//! This crate provides:
//! - A controller that drives the engine for the four game modes
//! - Undo/redo with bounded snapshot history
//! - Saving and loading games as JSON
//! - A match runner for pitting difficulty tiers against each other
//!
//! # Usage
//!
//! ```bash
//! # Play White against difficulty 4
//! cargo run -p ziffi_controller -- play --difficulty 4 --color w
//!
//! # Run 20 games between tiers 5 and 2
//! cargo run -p ziffi_controller -- match 5 2 --games 20
//! ```

mod config;
mod controller;
mod error;
mod history;
mod match_runner;
mod mode;
mod render;
mod store;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use history::*;
pub use match_runner::*;
pub use mode::*;
pub use render::*;
pub use store::*;
