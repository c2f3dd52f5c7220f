//! Attack predicates and check detection.
//!
//! Check detection scans every enemy piece and asks whether that piece, by
//! its own movement pattern, reaches the king's square. It stops at the first
//! attacker found.

use crate::{board::Board, types::*};

/// Whether `attacker`, standing on `from`, attacks `target`.
pub fn attacks(board: &Board, from: Square, attacker: Piece, target: Square) -> bool {
    match attacker.kind {
        PieceKind::Pawn => pawn_attacks(from, attacker.color, target),
        PieceKind::Knight => knight_attacks(from, target),
        PieceKind::Bishop => bishop_attacks(board, from, target),
        PieceKind::Rook => rook_attacks(board, from, target),
        PieceKind::Queen => {
            rook_attacks(board, from, target) || bishop_attacks(board, from, target)
        }
        PieceKind::King => king_attacks(from, target),
    }
}

/// One step diagonally forward, relative to the pawn's colour.
pub fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
    let dr = target.row as i32 - from.row as i32;
    let dc = (target.col as i32 - from.col as i32).abs();
    dr == color.forward() && dc == 1
}

pub fn knight_attacks(from: Square, target: Square) -> bool {
    let (dr, dc) = distance(from, target);
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

/// Chebyshev distance exactly one.
pub fn king_attacks(from: Square, target: Square) -> bool {
    let (dr, dc) = distance(from, target);
    dr <= 1 && dc <= 1 && dr + dc > 0
}

pub fn rook_attacks(board: &Board, from: Square, target: Square) -> bool {
    if from == target || (from.row != target.row && from.col != target.col) {
        return false;
    }
    path_clear(board, from, target)
}

pub fn bishop_attacks(board: &Board, from: Square, target: Square) -> bool {
    let (dr, dc) = distance(from, target);
    if dr == 0 || dr != dc {
        return false;
    }
    path_clear(board, from, target)
}

/// True when no square strictly between `from` and `to` is occupied.
/// The two squares must share a rank, file or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_r = (to.row as i32 - from.row as i32).signum();
    let step_c = (to.col as i32 - from.col as i32).signum();
    let mut cur = from.offset(step_r, step_c);
    while let Some(s) = cur {
        if s == to {
            return true;
        }
        if board.piece_at(s).is_some() {
            return false;
        }
        cur = s.offset(step_r, step_c);
    }
    false
}

fn distance(a: Square, b: Square) -> (usize, usize) {
    (a.row.abs_diff(b.row), a.col.abs_diff(b.col))
}

/// Whether `player`'s king is attacked. A side without a king on the board
/// is never in check.
pub fn is_in_check(board: &Board, player: Color) -> bool {
    let Some(king) = board.king_sq(player) else {
        return false;
    };
    let enemy = player.other();
    board
        .pieces()
        .filter(|(_, pc)| pc.color == enemy)
        .any(|(from, pc)| attacks(board, from, pc, king))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
