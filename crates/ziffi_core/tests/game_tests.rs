//! Whole-game properties of the engine
//!
//! Random playouts check that:
//! - no legal move leaves the mover in check
//! - every game ends after exactly 6 moves per side
//! - undoing every move restores the starting snapshot

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ziffi_core::{Board, Color, Engine, is_in_check, legal_moves};

fn random_game(seed: u64) -> (Engine, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut e = Engine::new();
    let mut plies = 0;
    while !e.is_game_over() {
        let player = e.current_player();
        let moves = e.all_legal_moves(player);
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        assert!(e.make_move(mv.from.row, mv.from.col, mv.to.row, mv.to.col, None));
        plies += 1;
    }
    (e, plies)
}

// =============================================================================
// Legality
// =============================================================================

#[test]
fn test_no_legal_move_leaves_mover_in_check() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut e = Engine::new();
        while !e.is_game_over() {
            let player = e.current_player();
            let moves = e.all_legal_moves(player);
            for mv in &moves {
                let mut b = e.canonical_board().clone();
                b.with_move(mv.from, mv.to, |b| {
                    assert!(!is_in_check(b, player), "{mv} leaves {player} in check");
                });
            }
            let Some(mv) = moves.choose(&mut rng).copied() else {
                break;
            };
            assert!(e.make_move(mv.from.row, mv.from.col, mv.to.row, mv.to.col, None));
        }
    }
}

#[test]
fn test_engine_moves_match_board_generator() {
    let e = Engine::new();
    for player in Color::ALL {
        assert_eq!(e.all_legal_moves(player), legal_moves(&Board::ziffi(), player));
    }
}

// =============================================================================
// Move limit
// =============================================================================

#[test]
fn test_games_end_after_six_moves_each() {
    for seed in 0..20 {
        let (e, plies) = random_game(seed);
        if e.is_game_over() {
            assert_eq!(plies, 12, "seed {seed}");
            assert_eq!(e.move_count(Color::White), 6);
            assert_eq!(e.move_count(Color::Black), 6);
            assert_eq!(e.winner(), e.calculate_winner());
        } else {
            // a side ran out of legal moves first
            assert!(e.all_legal_moves(e.current_player()).is_empty());
        }
    }
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_whole_game_restores_start() {
    let start = Engine::new().get_game_state();
    for seed in 0..10 {
        let (mut e, plies) = random_game(seed);
        for _ in 0..plies {
            assert!(e.undo_move());
        }
        assert!(!e.undo_move());
        assert_eq!(e.get_game_state(), start, "seed {seed}");
    }
}

#[test]
fn test_snapshot_restore_mid_game() {
    let (e, _) = random_game(3);
    let json = serde_json::to_string(&e.get_game_state()).unwrap();

    let mut restored = Engine::new();
    restored.restore(serde_json::from_str(&json).unwrap());
    assert_eq!(restored.get_game_state(), e.get_game_state());
    assert_eq!(restored.winner(), e.winner());
}
