use crate::{
    attacks::is_in_check,
    board::{Board, home_row},
    types::*,
};

const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal moves of the piece on `from` (empty if the square is empty).
/// Moves are not yet checked for leaving the own king attacked.
pub fn pseudo_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_leaper(board, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &BISHOP_DIRS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ROOK_DIRS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &ROOK_DIRS);
            gen_slider(board, from, pc.color, out, &BISHOP_DIRS);
        }
        PieceKind::King => gen_leaper(board, from, pc.color, out, &KING_DELTAS),
    }
}

/// Legal moves of the piece on `from`, where "legal" means the move does not
/// leave `guard`'s king in check. `guard` need not be the piece's colour.
pub fn legal_moves_from(board: &mut Board, from: Square, guard: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, from, out);
    // Filter in place by playing each candidate on the mutable board.
    out.retain(|mv| !board.with_move(mv.from, mv.to, |b| is_in_check(b, guard)));
}

/// All legal moves for `player`, scanning the board row by row.
/// Safety is judged against `player`'s own king.
pub fn legal_moves_into(board: &mut Board, player: Color, out: &mut Vec<Move>) {
    out.clear();
    let origins: Vec<Square> = board
        .pieces()
        .filter(|(_, pc)| pc.color == player)
        .map(|(sq, _)| sq)
        .collect();

    let mut buf = Vec::with_capacity(32);
    for from in origins {
        legal_moves_from(board, from, player, &mut buf);
        out.extend_from_slice(&buf);
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board, player: Color) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, player, &mut out);
    out
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if board.piece_at(to).is_none() {
            out.push(Move::new(from, to, MoveKind::Move));

            // forward 2 from the home rank
            if from.row == home_row(c) {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if board.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2, MoveKind::Move));
                    }
                }
            }
        }
    }

    // diagonal captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(Move::new(from, to, MoveKind::Capture));
                }
            }
        }
    }
}

fn gen_leaper(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i32, i32)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, MoveKind::Move)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to, MoveKind::Capture)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i32, i32)]) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, MoveKind::Move)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to, MoveKind::Capture));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
