//! Tile grid integration tests

use generative_grids::generators::palette::PaletteName;
use generative_grids::generators::tiles::{self, TileGridConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_neighbour_collisions_only_when_flagged() {
    let mut unflagged_violations = 0;
    for seed in 0..40 {
        for palette in [PaletteName::Folklore, PaletteName::Rgb, PaletteName::Yell] {
            let config = TileGridConfig { palette, color_bias: 2, ..TileGridConfig::default() };
            let output = tiles::generate(&config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            for (cell, tile) in output.tiles.iter() {
                if tile.background_collision {
                    continue;
                }
                let left = output.tiles.left(cell).map(|t| t.background);
                let up = output.tiles.up(cell).map(|t| t.background);
                if left == Some(tile.background) || up == Some(tile.background) {
                    unflagged_violations += 1;
                }
            }
        }
    }
    assert_eq!(unflagged_violations, 0);
}

#[test]
fn test_every_palette_renders() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for palette in PaletteName::ALL {
        let config = TileGridConfig { palette, columns: 4, rows: 3, ..TileGridConfig::default() };
        let output = tiles::generate(&config, &mut rng).unwrap();
        assert_eq!(output.palette.len(), palette.colors().len());
        let composition = output.composition();
        assert_eq!(composition.nodes.len(), 12);
        assert_eq!(composition.primitives().count(), 24);
    }
}

#[test]
fn test_randomized_grid_is_square() {
    let config = TileGridConfig { randomize: true, ..TileGridConfig::default() };
    let output = tiles::generate(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    assert_eq!(output.params.columns, output.params.rows);
    assert_eq!(output.tiles.filled(), output.params.columns * output.params.rows);
}
