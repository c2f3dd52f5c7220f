use serde::{Deserialize, Serialize};

use crate::types::*;

pub type Grid = [[Option<Piece>; 8]; 8];

/// Pawn rank from which a two-square advance is allowed.
pub fn home_row(c: Color) -> usize {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank on which a pawn of this colour promotes.
pub fn promotion_row(c: Color) -> usize {
    match c {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// The 8×8 mailbox grid. Serialises as nested arrays of piece codes / `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    pub fn from_grid(cells: Grid) -> Self {
        Board { cells }
    }

    /// The Ziffi mid-game layout: three pawns each on files c-e facing each
    /// other, back-rank pieces R N B Q K on files c-g directly behind them.
    pub fn ziffi() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for (i, &kind) in back.iter().enumerate() {
            b.cells[2][2 + i] = Some(Piece::new(Color::Black, kind));
            b.cells[5][2 + i] = Some(Piece::new(Color::White, kind));
        }
        for col in 2..5 {
            b.cells[3][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[4][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        b
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row][sq.col]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row][sq.col] = pc;
    }

    /// Raw coordinate lookup; anything off the board reads as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// 180° rotation: `(r, c)` of the result holds `(7 - r, 7 - c)` of `self`.
    pub fn rotated(&self) -> Board {
        let mut out = Board::empty();
        for (sq, pc) in self.pieces() {
            out.set_piece(sq.rotated(), Some(pc));
        }
        out
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                self.cells[row][col].map(|pc| (Square { row, col }, pc))
            })
        })
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Swap the colour of every piece on the board.
    pub fn recolor_all(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if let Some(pc) = cell {
                    *pc = pc.recolored();
                }
            }
        }
    }

    /// Plays `from -> to` in place, runs `f` on the modified board, then puts
    /// both squares back before returning `f`'s result.
    pub fn with_move<R>(&mut self, from: Square, to: Square, f: impl FnOnce(&mut Board) -> R) -> R {
        let moving = self.piece_at(from);
        let target = self.piece_at(to);
        self.set_piece(to, moving);
        self.set_piece(from, None);

        let out = f(self);

        self.set_piece(from, moving);
        self.set_piece(to, target);
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
