//! Terminal scoring for the move-limit rule.
//!
//! When both sides have used their moves, each side's total is its material
//! still on the board plus the material of every piece it captured. Captured
//! pieces therefore count twice: they left the opponent's total and joined the
//! capturer's.

use crate::{board::Board, types::*};

/// Completed moves per side after which the game is frozen.
pub const MOVE_LIMIT: u32 = 6;

/// Point value used by the move-limit rule.
pub fn material_value(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

pub fn material_totals(board: &Board, captured: &ByColor<Vec<Piece>>) -> ByColor<u32> {
    let mut totals = ByColor::new(0, 0);
    for (_, pc) in board.pieces() {
        totals[pc.color] += material_value(pc.kind);
    }
    for c in Color::ALL {
        totals[c] += captured[c].iter().map(|pc| material_value(pc.kind)).sum::<u32>();
    }
    totals
}

/// Higher total wins; `None` on equal totals.
pub fn calculate_winner(board: &Board, captured: &ByColor<Vec<Piece>>) -> Option<Color> {
    let totals = material_totals(board, captured);
    match totals.white.cmp(&totals.black) {
        std::cmp::Ordering::Greater => Some(Color::White),
        std::cmp::Ordering::Less => Some(Color::Black),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
