//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Candidate moves are simulated on the board with [`Board::with_move`], so the
//! board is back in its original state whenever a call returns, including
//! after a cutoff. Leaves are scored for the root player.
//!
//! Simulation only relocates pieces: no promotion, capture bookkeeping or
//! move-limit handling happens inside the tree.

use tracing::trace;

use crate::{board::Board, eval::evaluate, movegen::legal_moves_into, types::*};

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the best move from the searching side's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Scores every root move with a full-window alpha-beta search of the
/// remaining `depth - 1` plies and keeps the first strictly better one.
pub fn pick_best_move(board: &mut Board, player: Color, depth: u8, moves: &[Move]) -> SearchResult {
    let mut nodes = 0u64;
    root(board, player, depth, moves, &mut nodes, |b, nodes| {
        minimax(
            b,
            player,
            player.other(),
            depth.saturating_sub(1),
            false,
            i32::MIN,
            i32::MAX,
            nodes,
        )
    })
}

/// Same as [`pick_best_move`] without pruning. Visits every node.
pub fn pick_best_move_unpruned(
    board: &mut Board,
    player: Color,
    depth: u8,
    moves: &[Move],
) -> SearchResult {
    let mut nodes = 0u64;
    root(board, player, depth, moves, &mut nodes, |b, nodes| {
        minimax_unpruned(b, player, player.other(), depth.saturating_sub(1), false, nodes)
    })
}

fn root(
    board: &mut Board,
    player: Color,
    depth: u8,
    moves: &[Move],
    nodes: &mut u64,
    mut score_child: impl FnMut(&mut Board, &mut u64) -> i32,
) -> SearchResult {
    let mut best_move = moves.first().copied();
    let mut best_score = i32::MIN;

    for &mv in moves {
        let score = board.with_move(mv.from, mv.to, |b| score_child(b, nodes));
        trace!(%player, %mv, score, "root move scored");
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        depth,
        nodes: *nodes,
    }
}

/// Alpha-beta minimax. `root` is the side the score is reported for,
/// `to_move` the side whose moves are expanded at this node.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    board: &mut Board,
    root: Color,
    to_move: Color,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(board, root);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, to_move, &mut moves);
    if moves.is_empty() {
        return evaluate(board, root);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let score = board.with_move(mv.from, mv.to, |b| {
            minimax(b, root, to_move.other(), depth - 1, !maximizing, alpha, beta, nodes)
        });

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}

/// Plain minimax without cutoffs.
pub fn minimax_unpruned(
    board: &mut Board,
    root: Color,
    to_move: Color,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(board, root);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, to_move, &mut moves);
    if moves.is_empty() {
        return evaluate(board, root);
    }

    let scores = moves.into_iter().map(|mv| {
        board.with_move(mv.from, mv.to, |b| {
            minimax_unpruned(b, root, to_move.other(), depth - 1, !maximizing, nodes)
        })
    });
    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or_else(|| evaluate(board, root))
}

/// Heuristic value of `mv` for `player`: the static evaluation after the
/// move when `depth <= 1`, otherwise the minimax value of the remaining
/// `depth - 1` plies with the opponent to move.
pub fn evaluate_move(board: &mut Board, mv: Move, player: Color, depth: u8) -> i32 {
    board.with_move(mv.from, mv.to, |b| {
        if depth <= 1 {
            evaluate(b, player)
        } else {
            let mut nodes = 0;
            minimax_unpruned(b, player, player.other(), depth - 1, false, &mut nodes)
        }
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
