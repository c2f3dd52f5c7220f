use super::*;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

fn put(b: &mut Board, s: &str, color: Color, kind: PieceKind) {
    b.set_piece(sq(s), Some(Piece::new(color, kind)));
}

fn targets(moves: &[Move]) -> Vec<String> {
    let mut v: Vec<String> = moves.iter().map(|m| m.to.name()).collect();
    v.sort();
    v
}

#[test]
fn test_ziffi_start_moves() {
    let b = Board::ziffi();
    // 4 pawn captures, 8 knight, 4 rook, 7 bishop, 11 queen, 3 king
    assert_eq!(legal_moves(&b, Color::White).len(), 37);
    // The layout is mirrored, so Black has the same count
    assert_eq!(legal_moves(&b, Color::Black).len(), 37);
}

#[test]
fn test_start_pawns_only_capture() {
    let b = Board::ziffi();
    let mut out = Vec::new();
    pseudo_moves(&b, sq("d4"), &mut out);
    assert_eq!(targets(&out), vec!["c5", "e5"]);
    assert!(out.iter().all(|m| m.is_capture()));
}

#[test]
fn test_pawn_double_step_from_home_rank() {
    let mut b = Board::empty();
    put(&mut b, "d2", Color::White, PieceKind::Pawn);
    put(&mut b, "e7", Color::Black, PieceKind::Pawn);

    let mut out = Vec::new();
    pseudo_moves(&b, sq("d2"), &mut out);
    assert_eq!(targets(&out), vec!["d3", "d4"]);

    pseudo_moves(&b, sq("e7"), &mut out);
    assert!(targets(&out).contains(&"e5".to_string()));

    // Blocked on the intermediate square: no step at all
    put(&mut b, "d3", Color::Black, PieceKind::Knight);
    out.clear();
    pseudo_moves(&b, sq("d2"), &mut out);
    assert!(out.is_empty());
}

#[test]
fn test_slider_stops_at_first_blocker() {
    let mut b = Board::empty();
    put(&mut b, "a1", Color::White, PieceKind::Rook);
    put(&mut b, "a4", Color::Black, PieceKind::Pawn);
    put(&mut b, "c1", Color::White, PieceKind::Knight);

    let mut out = Vec::new();
    pseudo_moves(&b, sq("a1"), &mut out);
    assert_eq!(targets(&out), vec!["a2", "a3", "a4", "b1"]);
    let capture = out.iter().find(|m| m.to == sq("a4")).unwrap();
    assert_eq!(capture.kind, MoveKind::Capture);
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let mut b = Board::empty();
    put(&mut b, "d4", Color::White, PieceKind::Queen);
    let mut q = Vec::new();
    pseudo_moves(&b, sq("d4"), &mut q);

    put(&mut b, "d4", Color::White, PieceKind::Rook);
    let mut r = Vec::new();
    pseudo_moves(&b, sq("d4"), &mut r);

    put(&mut b, "d4", Color::White, PieceKind::Bishop);
    let mut bi = Vec::new();
    pseudo_moves(&b, sq("d4"), &mut bi);

    assert_eq!(q.len(), 27);
    assert_eq!(q.len(), r.len() + bi.len());
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut b = Board::empty();
    put(&mut b, "e1", Color::White, PieceKind::King);
    put(&mut b, "e3", Color::White, PieceKind::Rook);
    put(&mut b, "e8", Color::Black, PieceKind::Rook);

    let mut out = Vec::new();
    legal_moves_from(&mut b, sq("e3"), Color::White, &mut out);
    assert!(out.iter().all(|m| m.to.col == 4));
    assert!(out.iter().any(|m| m.to == sq("e8")));
}

#[test]
fn test_empty_square_has_no_moves() {
    let mut b = Board::ziffi();
    let mut out = vec![];
    legal_moves_from(&mut b, sq("a1"), Color::White, &mut out);
    assert!(out.is_empty());
}

#[test]
fn test_legal_filter_leaves_board_untouched() {
    let mut b = Board::ziffi();
    let before = b.clone();
    let mut out = Vec::new();
    legal_moves_into(&mut b, Color::White, &mut out);
    assert_eq!(b, before);
}
