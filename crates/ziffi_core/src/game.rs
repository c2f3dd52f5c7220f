//! The game engine: board, turn, move counters, captures and history.
//!
//! All validation failures are quiet. A rejected move returns `false` and
//! leaves every field untouched; an empty history makes `undo_move` return
//! `false`; a side with no legal move gets `None` from the AI.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    attacks,
    board::{Board, promotion_row},
    movegen::{legal_moves_from, legal_moves_into},
    scoring::{self, MOVE_LIMIT},
    strategy::Strategy,
    types::*,
};

/// Everything needed to invert one `make_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Side to move before the move was made.
    pub current_player: Color,
    /// Move counters before the move was made.
    pub move_count: ByColor<u32>,
}

/// Serialisable snapshot of an [`Engine`].
///
/// `board` is the presentation view: rotated 180° when `is_flipped` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub move_count: ByColor<u32>,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub move_history: Vec<MoveRecord>,
    pub is_flipped: bool,
    #[serde(default)]
    pub captured_pieces: ByColor<Vec<Piece>>,
}

#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    current_player: Color,
    move_count: ByColor<u32>,
    game_over: bool,
    winner: Option<Color>,
    move_history: Vec<MoveRecord>,
    captured_pieces: ByColor<Vec<Piece>>,
    is_flipped: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::from_board(Board::ziffi(), Color::White)
    }

    /// An engine with a fresh game on an arbitrary board.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Engine {
            board,
            current_player: to_move,
            move_count: ByColor::new(0, 0),
            game_over: false,
            winner: None,
            move_history: Vec::new(),
            captured_pieces: ByColor::default(),
            is_flipped: false,
        }
    }

    /// Back to the Ziffi layout with every counter and list cleared.
    pub fn reset_game(&mut self) {
        *self = Engine::new();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The grid as stored, or its 180° rotation when `flipped`.
    pub fn board(&self, flipped: bool) -> Board {
        if flipped {
            self.board.rotated()
        } else {
            self.board.clone()
        }
    }

    /// The unrotated grid all rules operate on.
    pub fn canonical_board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn move_count(&self, player: Color) -> u32 {
        self.move_count[player]
    }

    pub fn move_counts(&self) -> ByColor<u32> {
        self.move_count.clone()
    }

    pub fn is_move_limit_reached_for(&self, player: Color) -> bool {
        self.move_count[player] >= MOVE_LIMIT
    }

    /// Both sides have used up their moves.
    pub fn is_move_limit_reached(&self) -> bool {
        Color::ALL.iter().all(|&c| self.is_move_limit_reached_for(c))
    }

    /// The piece on `(row, col)`; off-board coordinates read as empty.
    pub fn piece(&self, row: usize, col: usize) -> Option<Piece> {
        self.board.get(row, col)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn captured_pieces(&self, capturer: Color) -> &[Piece] {
        &self.captured_pieces[capturer]
    }

    pub fn is_in_check(&self, player: Color) -> bool {
        attacks::is_in_check(&self.board, player)
    }

    // ------------------------------------------------------------------
    // Move generation
    // ------------------------------------------------------------------

    /// Legal moves for the piece on `(row, col)`.
    ///
    /// A move is kept when it does not leave the *side to move* in check,
    /// whatever the colour of the queried piece. Use
    /// [`Engine::generate_valid_moves_for_owner`] to judge safety against the
    /// piece's own king instead.
    pub fn generate_valid_moves(&self, row: usize, col: usize) -> Vec<Move> {
        self.moves_guarded_by(row, col, |_| self.current_player)
    }

    /// Legal moves for the piece on `(row, col)`, judged against the king of
    /// the piece's own colour.
    pub fn generate_valid_moves_for_owner(&self, row: usize, col: usize) -> Vec<Move> {
        self.moves_guarded_by(row, col, |pc| pc.color)
    }

    fn moves_guarded_by(&self, row: usize, col: usize, guard: impl Fn(Piece) -> Color) -> Vec<Move> {
        let (Some(from), Some(pc)) = (Square::new(row, col), self.board.get(row, col)) else {
            return Vec::new();
        };
        let mut tmp = self.board.clone();
        let mut out = Vec::new();
        legal_moves_from(&mut tmp, from, guard(pc), &mut out);
        out
    }

    /// Every legal move of every piece of `player`, in row-major order of the
    /// origin square. Safety is judged against `player`'s own king.
    pub fn all_legal_moves(&self, player: Color) -> Vec<Move> {
        let mut tmp = self.board.clone();
        let mut out = Vec::with_capacity(64);
        legal_moves_into(&mut tmp, player, &mut out);
        out
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Plays `(from_row, from_col) -> (to_row, to_col)` for the side to move.
    ///
    /// The destination is re-validated against a fresh move list. A pawn that
    /// reaches the far rank becomes `promotion` (Queen when `None`, or when a
    /// Pawn or King is asked for). Returns `false` without touching any state
    /// when the move is not legal.
    pub fn make_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
        promotion: Option<PieceKind>,
    ) -> bool {
        let (Some(from), Some(to)) = (Square::new(from_row, from_col), Square::new(to_row, to_col))
        else {
            debug!(from_row, from_col, to_row, to_col, "move off the board rejected");
            return false;
        };
        let Some(piece) = self.board.piece_at(from) else {
            debug!(%from, "no piece on source square");
            return false;
        };
        if !self
            .generate_valid_moves(from_row, from_col)
            .iter()
            .any(|mv| mv.to == to)
        {
            debug!(%from, %to, "illegal move rejected");
            return false;
        }

        let mover = self.current_player;
        let captured = self.board.piece_at(to);
        let record = MoveRecord {
            from_row,
            from_col,
            to_row,
            to_col,
            moved_piece: piece,
            captured_piece: captured,
            current_player: mover,
            move_count: self.move_count.clone(),
        };

        self.board.set_piece(to, Some(piece));
        self.board.set_piece(from, None);

        if let Some(cp) = captured {
            self.captured_pieces[mover].push(cp);
        }

        if piece.kind == PieceKind::Pawn && to.row == promotion_row(piece.color) {
            let kind = match promotion {
                Some(PieceKind::Pawn) | Some(PieceKind::King) | None => PieceKind::Queen,
                Some(k) => k,
            };
            self.board.set_piece(to, Some(Piece::new(piece.color, kind)));
        }

        self.move_history.push(record);
        self.move_count[mover] += 1;
        debug!(%from, %to, piece = %piece.code(), captured = ?captured.map(Piece::code), "move made");

        if self.is_move_limit_reached() {
            self.game_over = true;
            self.winner = self.calculate_winner();
            info!(winner = ?self.winner, "move limit reached");
        }

        // The turn passes even when this move ended the game.
        self.current_player = self.current_player.other();
        true
    }

    /// Reverts the most recent move. Returns `false` if there is none.
    ///
    /// The captured piece is popped from the capture list of the restored
    /// side to move, which is the mover of record unless the sides were
    /// swapped in between.
    pub fn undo_move(&mut self) -> bool {
        let Some(rec) = self.move_history.pop() else {
            return false;
        };
        let (Some(from), Some(to)) = (
            Square::new(rec.from_row, rec.from_col),
            Square::new(rec.to_row, rec.to_col),
        ) else {
            self.move_history.push(rec);
            return false;
        };

        self.board.set_piece(from, Some(rec.moved_piece));
        self.board.set_piece(to, rec.captured_piece);

        self.current_player = rec.current_player;
        self.move_count = rec.move_count;

        if rec.captured_piece.is_some() {
            self.captured_pieces[self.current_player].pop();
        }

        self.game_over = false;
        self.winner = None;
        debug!(%from, %to, "move undone");
        true
    }

    /// Material on the board plus captured material, higher total wins.
    pub fn calculate_winner(&self) -> Option<Color> {
        scoring::calculate_winner(&self.board, &self.captured_pieces)
    }

    // ------------------------------------------------------------------
    // Snapshots and presentation
    // ------------------------------------------------------------------

    pub fn get_game_state(&self) -> GameState {
        GameState {
            board: self.board(self.is_flipped),
            current_player: self.current_player,
            move_count: self.move_counts(),
            game_over: self.game_over,
            winner: self.winner,
            move_history: self.move_history.clone(),
            is_flipped: self.is_flipped,
            captured_pieces: self.captured_pieces.clone(),
        }
    }

    /// Replaces the whole engine state with `state`.
    pub fn restore(&mut self, state: GameState) {
        self.board = if state.is_flipped {
            state.board.rotated()
        } else {
            state.board
        };
        self.current_player = state.current_player;
        self.move_count = state.move_count;
        self.game_over = state.game_over;
        self.winner = state.winner;
        self.move_history = state.move_history;
        self.is_flipped = state.is_flipped;
        self.captured_pieces = state.captured_pieces;
    }

    pub fn toggle_flip(&mut self) -> bool {
        self.is_flipped = !self.is_flipped;
        self.is_flipped
    }

    /// Full colour swap: every piece changes colour, and the turn, move
    /// counters, capture lists and the player of every history record follow.
    /// Pieces stored inside capture lists and history records keep their
    /// original colour.
    pub fn swap_sides(&mut self) {
        self.board.recolor_all();
        self.current_player = self.current_player.other();
        self.move_count.swap();
        self.captured_pieces.swap();
        for rec in &mut self.move_history {
            rec.current_player = rec.current_player.other();
        }
    }

    /// Hands the move to the other side without touching the board.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    // ------------------------------------------------------------------
    // Computer play
    // ------------------------------------------------------------------

    /// A move for `player` at the given difficulty, or `None` without any
    /// legal move. Does not play the move.
    pub fn get_ai_move(&self, player: Color, difficulty: u8) -> Option<Move> {
        self.get_ai_move_with_rng(player, difficulty, &mut rand::thread_rng())
    }

    pub fn get_ai_move_with_rng<R: Rng + ?Sized>(
        &self,
        player: Color,
        difficulty: u8,
        rng: &mut R,
    ) -> Option<Move> {
        let moves = self.all_legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        let strategy = Strategy::from_difficulty(difficulty);
        debug!(?strategy, %player, candidates = moves.len(), "selecting AI move");

        let mut tmp = self.board.clone();
        strategy
            .select(&mut tmp, player, &moves, rng)
            .or_else(|| moves.first().copied())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
