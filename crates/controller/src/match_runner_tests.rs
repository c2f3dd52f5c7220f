use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_self_play() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = MatchConfig {
        num_games: 4,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(1, 1, &mut rng);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 4);
}

#[test]
fn test_score() {
    assert_eq!(MatchResult::new().score(), 0.5);
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 2,
    };
    assert_eq!(result.score(), 4.0 / 6.0);
}

#[test]
fn test_seeded_match_is_reproducible() {
    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let a = runner.run_match(0, 1, &mut StdRng::seed_from_u64(21));
    let b = runner.run_match(0, 1, &mut StdRng::seed_from_u64(21));
    assert_eq!(a, b);
}

#[test]
fn test_single_game_between_searchers() {
    let mut rng = StdRng::seed_from_u64(2);
    // minimax tiers draw nothing from the rng
    let result = play_game(3, 3, &mut rng);
    assert_eq!(result, play_game(3, 3, &mut rng));
}

#[test]
fn test_result_serializes() {
    let json = serde_json::to_string(&MatchResult {
        wins: 1,
        losses: 0,
        draws: 2,
    })
    .unwrap();
    assert_eq!(json, r#"{"wins":1,"losses":0,"draws":2}"#);
}
