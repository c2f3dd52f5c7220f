use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_defaults() {
    let config = ControllerConfig::default();
    assert_eq!(config.mode, GameMode::HumanVsEngine);
    assert_eq!(config.difficulty, 3);
    assert_eq!(config.human_color, Color::White);
    assert_eq!(config.history_limit, 50);
    assert_eq!(config.save_dir, PathBuf::from("saves"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = ControllerConfig::from_toml(
        r#"
        mode = "engine-vs-engine"
        difficulty = 5
        human_color = "b"
        "#,
    )
    .unwrap();
    assert_eq!(config.mode, GameMode::EngineVsEngine);
    assert_eq!(config.difficulty, 5);
    assert_eq!(config.human_color, Color::Black);
    assert_eq!(config.think_delay_ms, 500);
    assert_eq!(config.autoplay_delay(), Duration::from_millis(1000));
}

#[test]
fn test_bad_mode_is_an_error() {
    let err = ControllerConfig::from_toml("mode = \"blitz\"").unwrap_err();
    assert!(matches!(err, crate::ControllerError::Toml(_)));
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("ziffi_no_such_config_file.toml");
    let config = ControllerConfig::load(&path).unwrap();
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_think_delay_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let config = ControllerConfig::default();
    for _ in 0..50 {
        let d = config.think_delay(&mut rng);
        assert!(d >= Duration::from_millis(500) && d < Duration::from_millis(1000));
    }

    let fixed = ControllerConfig {
        think_jitter_ms: 0,
        ..ControllerConfig::default()
    };
    assert_eq!(fixed.think_delay(&mut rng), Duration::from_millis(500));
}
