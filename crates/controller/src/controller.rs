//! Game session: mode, roles, selection, undo/redo and AI turns on top of
//! the engine.

use chrono::Utc;
use rand::Rng;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use ziffi_core::{Color, Engine, Move, PieceKind, Square, MOVE_LIMIT};

use crate::config::ControllerConfig;
use crate::error::{ControllerError, Result};
use crate::history::{BoundedStack, Snapshot};
use crate::mode::{GameMode, PlayerColors};
use crate::store::{new_game_id, GameStore, SavedGame};

/// What a board click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// Not the clicker's turn, or no game running
    Ignored,
    Selected,
    Deselected,
    Moved,
    /// A failed move attempt dropped the selection
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Color),
    Draw,
}

/// Turn, move counter and result line for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub current_player: Color,
    /// Moves already made by the side to move
    pub moves_made: u32,
    pub outcome: Outcome,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to move, {}/{} | ",
            self.current_player, self.moves_made, MOVE_LIMIT
        )?;
        match self.outcome {
            Outcome::InProgress => write!(f, "game in progress"),
            Outcome::Winner(c) => write!(f, "{c} wins"),
            Outcome::Draw => write!(f, "draw, equal material"),
        }
    }
}

pub struct GameController {
    engine: Engine,
    config: ControllerConfig,
    mode: Option<GameMode>,
    difficulty: u8,
    player_colors: PlayerColors,
    active: bool,
    selected: Option<Square>,
    valid_moves: Vec<Move>,
    undo_stack: BoundedStack<Snapshot>,
    redo_stack: BoundedStack<Snapshot>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl GameController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            engine: Engine::new(),
            mode: None,
            difficulty: config.difficulty,
            player_colors: PlayerColors::human_plays(config.human_color),
            active: false,
            selected: None,
            valid_moves: Vec::new(),
            undo_stack: BoundedStack::new(config.history_limit),
            redo_stack: BoundedStack::new(config.history_limit),
            config,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn player_colors(&self) -> PlayerColors {
        self.player_colors
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations cached for the selected square.
    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Switches mode and starts a fresh game in it.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        info!(%mode, "game mode selected");
        self.mode = Some(mode);
        self.start_game();
    }

    pub fn set_difficulty(&mut self, level: u8) {
        info!(level, "difficulty set");
        self.difficulty = level;
    }

    pub fn start_game(&mut self) {
        self.engine.reset_game();
        self.active = true;
        self.clear_selection();
        self.undo_stack.clear();
        self.redo_stack.clear();
        info!(mode = ?self.mode, difficulty = self.difficulty, human = %self.player_colors.human, "game started");
    }

    pub fn new_game(&mut self) {
        self.start_game();
    }

    pub fn back_to_menu(&mut self) {
        self.active = false;
        self.mode = None;
        self.clear_selection();
    }

    // ------------------------------------------------------------------
    // Human moves
    // ------------------------------------------------------------------

    /// Selects `(row, col)` and caches its legal moves.
    pub fn select_square(&mut self, row: usize, col: usize) -> &[Move] {
        self.selected = Square::new(row, col);
        self.valid_moves = self.engine.generate_valid_moves(row, col);
        &self.valid_moves
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Plays `from -> to` if `from` is selected and `to` is one of its cached
    /// destinations.
    pub fn attempt_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if self.selected != Some(from) || !self.valid_moves.iter().any(|mv| mv.to == to) {
            return false;
        }
        let snapshot = self.snapshot();
        if !self
            .engine
            .make_move(from.row, from.col, to.row, to.col, promotion)
        {
            return false;
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        self.clear_selection();
        true
    }

    /// Whether the side to move is controlled by someone at this board.
    fn human_may_move(&self) -> bool {
        match self.mode {
            Some(GameMode::EngineVsEngine) => false,
            Some(GameMode::HumanVsEngine) | Some(GameMode::OnlineTwoPlayer) => {
                self.engine.current_player() == self.player_colors.human
            }
            _ => true,
        }
    }

    fn is_own_piece(&self, row: usize, col: usize) -> bool {
        self.engine
            .piece(row, col)
            .is_some_and(|pc| pc.color == self.engine.current_player())
    }

    pub fn handle_square_click(&mut self, row: usize, col: usize) -> Click {
        let Some(sq) = Square::new(row, col) else {
            return Click::Ignored;
        };
        if !self.active || self.engine.is_game_over() || !self.human_may_move() {
            return Click::Ignored;
        }

        if self.selected == Some(sq) {
            self.clear_selection();
            return Click::Deselected;
        }

        if let Some(from) = self.selected {
            if self.attempt_move(from, sq, None) {
                return Click::Moved;
            }
            if self.is_own_piece(row, col) {
                self.select_square(row, col);
                return Click::Selected;
            }
            self.clear_selection();
            return Click::Cleared;
        }

        if self.is_own_piece(row, col) {
            self.select_square(row, col);
            return Click::Selected;
        }
        Click::Ignored
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.engine.get_game_state(),
            selected: self.selected,
            valid_moves: self.valid_moves.clone(),
        }
    }

    fn apply(&mut self, snapshot: Snapshot) {
        self.engine.restore(snapshot.state);
        self.selected = snapshot.selected;
        self.valid_moves = snapshot.valid_moves;
    }

    pub fn undo_move(&mut self) -> bool {
        let Some(prev) = self.undo_stack.pop() else {
            warn!("nothing to undo");
            return false;
        };
        self.redo_stack.push(self.snapshot());
        self.apply(prev);
        true
    }

    pub fn redo_move(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            warn!("nothing to redo");
            return false;
        };
        self.undo_stack.push(self.snapshot());
        self.apply(next);
        true
    }

    pub fn flip_board(&mut self) -> bool {
        self.engine.toggle_flip()
    }

    /// Hands the turn over and swaps which colour the human plays. Pieces
    /// stay as they are.
    pub fn swap_roles(&mut self) {
        self.engine.pass_turn();
        self.player_colors.swap();
        info!(human = %self.player_colors.human, "roles swapped");
    }

    // ------------------------------------------------------------------
    // AI and remote moves
    // ------------------------------------------------------------------

    /// The colour the engine plays right now, if any.
    pub fn ai_color(&self) -> Option<Color> {
        match self.mode {
            Some(GameMode::EngineVsEngine) => Some(self.engine.current_player()),
            Some(GameMode::HumanVsEngine) => Some(self.player_colors.human.other()),
            _ => None,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.active
            && !self.engine.is_game_over()
            && self.ai_color() == Some(self.engine.current_player())
    }

    /// Plays one AI move when it is the AI's turn.
    pub fn ai_turn(&mut self) -> Option<Move> {
        self.ai_turn_with_rng(&mut rand::thread_rng())
    }

    pub fn ai_turn_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        if !self.is_ai_turn() {
            return None;
        }
        let color = self.engine.current_player();
        let mv = self
            .engine
            .get_ai_move_with_rng(color, self.difficulty, rng)?;

        let snapshot = self.snapshot();
        if !self
            .engine
            .make_move(mv.from.row, mv.from.col, mv.to.row, mv.to.col, None)
        {
            return None;
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        info!(%color, %mv, "AI moved");
        Some(mv)
    }

    /// How long to wait before asking for the next AI move.
    pub fn think_delay(&self) -> Duration {
        self.config.think_delay(&mut rand::thread_rng())
    }

    pub fn autoplay_delay(&self) -> Duration {
        self.config.autoplay_delay()
    }

    /// Plays a typed move for the local side to move, under the same rules
    /// as clicking the two squares.
    pub fn submit_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if !self.human_may_move() {
            return false;
        }
        self.play_validated(from, to, promotion)
    }

    /// Applies a move received from the online opponent through the same
    /// checks as a local click. Only the opponent's colour is accepted.
    pub fn apply_remote_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if self.mode != Some(GameMode::OnlineTwoPlayer)
            || self.engine.current_player() != self.player_colors.ai
        {
            return false;
        }
        self.play_validated(from, to, promotion)
    }

    fn play_validated(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if !self.active || self.engine.is_game_over() || !self.is_own_piece(from.row, from.col) {
            return false;
        }
        self.select_square(from.row, from.col);
        if self.attempt_move(from, to, promotion) {
            return true;
        }
        self.clear_selection();
        false
    }

    pub fn status(&self) -> Status {
        let current = self.engine.current_player();
        let outcome = if self.engine.is_move_limit_reached() {
            match self.engine.winner() {
                Some(c) => Outcome::Winner(c),
                None => Outcome::Draw,
            }
        } else {
            Outcome::InProgress
        };
        Status {
            current_player: current,
            moves_made: self.engine.move_count(current),
            outcome,
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Writes the running game to `store` and returns its new id.
    pub fn save_current_game(&self, store: &mut dyn GameStore) -> Result<String> {
        if !self.active {
            return Err(ControllerError::NoActiveGame);
        }
        let now = Utc::now();
        let id = new_game_id(now, &mut rand::thread_rng());
        let saved = SavedGame {
            game_id: id.clone(),
            game_state: self.engine.get_game_state(),
            game_mode: self.mode,
            difficulty: self.difficulty,
            player_colors: self.player_colors,
            created_at: now,
            saved_at: now,
        };
        store.save(&saved)?;
        info!(%id, "game saved");
        Ok(id)
    }

    pub fn load_game(&mut self, store: &dyn GameStore, id: &str) -> Result<()> {
        let saved = match store.load(id) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(%id, error = %e, "failed to load game");
                return Err(e);
            }
        };
        self.engine.restore(saved.game_state);
        self.mode = saved.game_mode;
        self.difficulty = saved.difficulty;
        self.player_colors = saved.player_colors;
        self.active = true;
        self.clear_selection();
        self.undo_stack.clear();
        self.redo_stack.clear();
        info!(%id, "game loaded");
        Ok(())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
