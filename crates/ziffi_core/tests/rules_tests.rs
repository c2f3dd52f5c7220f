//! Rule scenarios checked through the public API
//!
//! - Ziffi starting layout
//! - Capture lists across a side swap
//! - Promotion default
//! - Pruned and unpruned search agree

use ziffi_core::{
    evaluate_move, legal_moves, pick_best_move, search::pick_best_move_unpruned,
    Board, Color, Engine, Piece, PieceKind, Square,
};

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn put(b: &mut Board, s: &str, color: Color, kind: PieceKind) {
    b.set_piece(sq(s), Some(Piece::new(color, kind)));
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_starting_layout() {
    let e = Engine::new();
    let b = e.canonical_board();
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    for (i, file) in ['c', 'd', 'e', 'f', 'g'].iter().enumerate() {
        let white = sq(&format!("{file}3"));
        let black = sq(&format!("{file}6"));
        assert_eq!(b.piece_at(white), Some(Piece::new(Color::White, back[i])));
        assert_eq!(b.piece_at(black), Some(Piece::new(Color::Black, back[i])));
    }
    for file in ['c', 'd', 'e'] {
        assert_eq!(
            b.piece_at(sq(&format!("{file}4"))),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            b.piece_at(sq(&format!("{file}5"))),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }
    assert_eq!(b.pieces().count(), 16);
}

// =============================================================================
// Captures across a side swap
// =============================================================================

#[test]
fn test_undo_after_swap_pops_the_restored_sides_list() {
    let mut e = Engine::new();
    let (from, to) = (sq("d4"), sq("e5"));
    assert!(e.make_move(from.row, from.col, to.row, to.col, None));
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
    assert_eq!(e.captured_pieces(Color::White), &[black_pawn]);

    e.swap_sides();
    // the lists trade owners but the stored piece keeps its colour
    assert!(e.captured_pieces(Color::White).is_empty());
    assert_eq!(e.captured_pieces(Color::Black), &[black_pawn]);
    assert_eq!(e.move_history()[0].current_player, Color::Black);

    assert!(e.undo_move());
    assert_eq!(e.current_player(), Color::Black);
    assert!(e.captured_pieces(Color::White).is_empty());
    assert!(e.captured_pieces(Color::Black).is_empty());
    // recorded pieces go back as they were stored
    assert_eq!(
        e.piece(from.row, from.col),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(e.piece(to.row, to.col), Some(black_pawn));
    // the rest of the board stays recoloured
    let c4 = sq("c4");
    assert_eq!(
        e.piece(c4.row, c4.col),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn test_black_pawn_promotes_to_queen() {
    let mut b = Board::empty();
    put(&mut b, "h1", Color::White, PieceKind::King);
    put(&mut b, "a8", Color::Black, PieceKind::King);
    put(&mut b, "c2", Color::Black, PieceKind::Pawn);

    let mut e = Engine::from_board(b, Color::Black);
    let (from, to) = (sq("c2"), sq("c1"));
    assert!(e.make_move(from.row, from.col, to.row, to.col, None));
    assert_eq!(
        e.piece(to.row, to.col),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_pruning_never_changes_the_answer() {
    let mut e = Engine::new();
    for (from, to) in [("d4", "e5"), ("d6", "e4"), ("f3", "e4")] {
        let (f, t) = (sq(from), sq(to));
        assert!(e.make_move(f.row, f.col, t.row, t.col, None), "{from}-{to}");
    }

    let mut b = e.canonical_board().clone();
    let player = e.current_player();
    let moves = legal_moves(&b, player);
    for depth in 1..=3 {
        let pruned = pick_best_move(&mut b, player, depth, &moves);
        let plain = pick_best_move_unpruned(&mut b, player, depth, &moves);
        assert_eq!(pruned.best_move, plain.best_move, "depth {depth}");
        assert_eq!(pruned.score, plain.score, "depth {depth}");
    }
}

#[test]
fn test_evaluate_move_leaves_board_alone() {
    let mut b = Board::ziffi();
    for mv in legal_moves(&Board::ziffi(), Color::White) {
        evaluate_move(&mut b, mv, Color::White, 2);
    }
    assert_eq!(b, Board::ziffi());
}
