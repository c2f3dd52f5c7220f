use super::*;
use crate::movegen::legal_moves;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn put(b: &mut Board, s: &str, color: Color, kind: PieceKind) {
    b.set_piece(sq(s), Some(Piece::new(color, kind)));
}

fn hanging_queen() -> Board {
    let mut b = Board::empty();
    put(&mut b, "a1", Color::White, PieceKind::King);
    put(&mut b, "d1", Color::White, PieceKind::Queen);
    put(&mut b, "d8", Color::Black, PieceKind::Queen);
    put(&mut b, "h8", Color::Black, PieceKind::King);
    b
}

#[test]
fn test_takes_hanging_queen() {
    let mut b = hanging_queen();
    let moves = legal_moves(&b, Color::White);
    for depth in 1..=3 {
        let result = pick_best_move(&mut b, Color::White, depth, &moves);
        let best = result.best_move.unwrap();
        assert_eq!((best.from, best.to), (sq("d1"), sq("d8")), "depth {depth}");
        assert_eq!(result.score, 900);
    }
}

#[test]
fn test_pruning_matches_plain_minimax() {
    let mut b = Board::ziffi();
    for player in Color::ALL {
        let moves = legal_moves(&b, player);
        for depth in 1..=3 {
            let pruned = pick_best_move(&mut b, player, depth, &moves);
            let plain = pick_best_move_unpruned(&mut b, player, depth, &moves);
            assert_eq!(pruned.best_move, plain.best_move);
            assert_eq!(pruned.score, plain.score);
            assert!(pruned.nodes <= plain.nodes);
        }
    }
}

#[test]
fn test_search_restores_board() {
    let mut b = Board::ziffi();
    let before = b.clone();
    let moves = legal_moves(&b, Color::Black);
    pick_best_move(&mut b, Color::Black, 3, &moves);
    assert_eq!(b, before);
}

#[test]
fn test_no_moves_no_best_move() {
    let mut b = Board::ziffi();
    let result = pick_best_move(&mut b, Color::White, 2, &[]);
    assert!(result.best_move.is_none());
}

#[test]
fn test_evaluate_move_depths() {
    let mut b = hanging_queen();
    let capture = Move::new(sq("d1"), sq("d8"), MoveKind::Capture);
    assert_eq!(evaluate_move(&mut b, capture, Color::White, 1), 900);
    assert_eq!(evaluate_move(&mut b, capture, Color::White, 2), 900);

    // Moving the queen off the d-file leaves it en prise to nothing, but
    // gives Black the chance to keep its queen: level material.
    let quiet = Move::new(sq("d1"), sq("c2"), MoveKind::Move);
    assert_eq!(evaluate_move(&mut b, quiet, Color::White, 1), 0);
    assert!(evaluate_move(&mut b, quiet, Color::White, 2) <= 0);
}
