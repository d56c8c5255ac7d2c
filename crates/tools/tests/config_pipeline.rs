use std::fs;

use maze_core::{MazeError, generate_seeded};
use maze_tools::{MazeConfig, OutputFormat, SeedChoice, render, resolve_seed};
use proptest::prelude::*;
use tempfile::tempdir;

#[test]
fn config_file_drives_generation_end_to_end() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("maze.toml");
    fs::write(&path, "width = 11\nheight = 9\nseed = 77\n").expect("write");

    let config = MazeConfig::load(&path).expect("load");
    let (width, height) = config.dimensions(None, None);
    let seed = resolve_seed(None, None, config.seed, 1).expect("seed resolution");
    assert_eq!(seed, SeedChoice::Config(77));

    let grid = generate_seeded(width, height, seed.value()).expect("valid dimensions");
    let text = render(&grid, seed.value(), OutputFormat::Text).expect("render");
    assert_eq!(text.lines().count(), 2 + 9);
    assert!(text.lines().skip(2).all(|line| line.len() == 11));
}

#[test]
fn undersized_config_surfaces_invalid_dimensions() {
    let config = MazeConfig { width: Some(3), height: Some(3), seed: None };
    let (width, height) = config.dimensions(None, None);
    assert_eq!(
        generate_seeded(width, height, 0),
        Err(MazeError::InvalidDimensions { width: 3, height: 3 })
    );
}

proptest! {
    #[test]
    fn seed_flag_always_wins(
        flag in any::<u64>(),
        config in any::<Option<u64>>(),
        generated in any::<u64>(),
    ) {
        let choice = resolve_seed(Some(flag), Some("123"), config, generated)
            .expect("flag never fails to resolve");
        prop_assert_eq!(choice, SeedChoice::Flag(flag));
    }
}
