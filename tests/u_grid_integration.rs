//! U grid integration tests

use generative_grids::core::types::Point;
use generative_grids::generators::u_grid::{self, Direction, UGridConfig, USegment};
use generative_grids::render::markup::to_svg;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn still_config() -> UGridConfig {
    UGridConfig {
        columns: 2,
        rows: 2,
        scale: 10.0,
        gap: 0.0,
        shape_variation: 0.0,
        offset_jiggle: 0.0,
        frame: 0.0,
        ..UGridConfig::default()
    }
}

/// Outline relative to the segment centre, as a sorted integer set
fn relative_outline(segment: &USegment) -> Vec<(i64, i64)> {
    let mut points: Vec<(i64, i64)> = segment
        .vertices()
        .into_iter()
        .map(|p| {
            let d = p - segment.center;
            ((d.x * 1000.0).round() as i64, (d.y * 1000.0).round() as i64)
        })
        .collect();
    points.sort_unstable();
    points
}

fn rotate(points: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut rotated: Vec<(i64, i64)> = points.iter().map(|&(x, y)| (-y, x)).collect();
    rotated.sort_unstable();
    rotated
}

#[test]
fn test_two_by_two_centres() {
    let output = u_grid::generate(&still_config(), &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let centres: Vec<Point> = output.segments.iter().map(|s| s.center).collect();
    assert_eq!(
        centres,
        vec![
            Point::new(5.0, 5.0),
            Point::new(5.0, 15.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
        ]
    );
    assert_eq!(output.view_box.width, 20.0);
    assert_eq!(output.view_box.height, 20.0);
}

#[test]
fn test_outlines_are_rotations_of_each_other() {
    let output = u_grid::generate(&still_config(), &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let reference = relative_outline(&USegment::new(Point::new(0.0, 0.0), 10.0, Direction::North, 0.0));

    let mut rotations = vec![reference.clone()];
    for i in 0..3 {
        let next = rotate(&rotations[i]);
        rotations.push(next);
    }

    for segment in &output.segments {
        let outline = relative_outline(segment);
        assert!(
            rotations.contains(&outline),
            "{:?} outline is not a rotation of the north outline",
            segment.direction
        );
    }
}

#[test]
fn test_svg_contains_one_path_per_segment() {
    let config = UGridConfig { separate_paths: true, ..still_config() };
    let output = u_grid::generate(&config, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    let svg = to_svg(&output.composition());
    assert_eq!(svg.matches("<path").count(), 4);
    assert!(svg.contains("element-3"));
    assert!(svg.contains("A Grid of Us"));
}
