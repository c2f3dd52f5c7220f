use crate::{board::Board, types::*};

/// Material values in centipawns.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

pub const PAWN_VALUE: i32 = PIECE_VALUES[0];

pub fn piece_value(kind: PieceKind) -> i32 {
    let idx = match kind {
        PieceKind::Pawn => 0,
        PieceKind::Knight => 1,
        PieceKind::Bishop => 2,
        PieceKind::Rook => 3,
        PieceKind::Queen => 4,
        PieceKind::King => 5,
    };
    PIECE_VALUES[idx]
}

/// Simple material evaluation from `perspective`'s side.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let mut score = 0i32;
    for (_, pc) in board.pieces() {
        let v = piece_value(pc.kind);
        score += if pc.color == perspective { v } else { -v };
    }
    score
}
