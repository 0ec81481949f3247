use boxes::save::{decode, encode};
use boxes::{GameConfig, GameEngine, Orientation};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_engine(seed: u64, config: &GameConfig) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(config).unwrap();
    let moves = rng.random_range(0..config.height() * config.width() * 3);
    for _ in 0..moves {
        let (o, r, c) = if rng.random() {
            (
                Orientation::Horizontal,
                rng.random_range(0..=config.height()),
                rng.random_range(0..config.width()),
            )
        } else {
            (
                Orientation::Vertical,
                rng.random_range(0..config.height()),
                rng.random_range(0..=config.width()),
            )
        };
        engine.play_edge(o, r as i64, c as i64);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn text_roundtrip(
        seed in any::<u64>(),
        height in 2usize..8,
        width in 2usize..8,
        players in 2usize..12,
    ) {
        let config = GameConfig::new(height, width, players).unwrap();
        let engine = random_engine(seed, &config);
        let text = encode(&engine.state());
        let decoded = decode(&text, &config).unwrap();
        prop_assert_eq!(&decoded, &engine.state());

        let restored = GameEngine::from_state(decoded).unwrap();
        prop_assert_eq!(restored.players(), engine.players());
        prop_assert_eq!(restored.current_player(), engine.current_player());
        prop_assert_eq!(encode(&restored.state()), text);
    }

    #[test]
    fn file_roundtrip(seed in any::<u64>()) {
        let config = GameConfig::new(5, 3, 4).unwrap();
        let engine = random_engine(seed, &config);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.txt");
        boxes::save::save(&path, &engine.state()).unwrap();
        let loaded = boxes::save::load(&path, &config).unwrap();
        prop_assert_eq!(loaded, engine.state());
    }

    #[test]
    fn truncated_edge_line_is_rejected(seed in any::<u64>(), line in 1usize..12) {
        let config = GameConfig::new(5, 4, 2).unwrap();
        let engine = random_engine(seed, &config);
        let text = encode(&engine.state());
        let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
        // lines 1..=11 are edge lines for a 5-high grid
        lines[line].pop();
        let broken = lines.join("\n");
        let err = decode(&broken, &config).unwrap_err();
        prop_assert_eq!(err.line, line + 1);
    }
}
