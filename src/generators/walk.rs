//! Longest walk through a diagonal maze
//!
//! A walker enters the maze from outside the border and follows the channel
//! between the diagonal lines: every cell it enters turns it left or right
//! depending on the cell's slope, until it leaves the grid again. Each entry
//! point has exactly one trajectory, so this is a straight simulation rather
//! than a search.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::core::types::Point;
use crate::generators::maze::{DiagonalLine, Slope};
use crate::render::markup::num;
use crate::spatial::FillGrid;

/// Travel direction of the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Unit step in grid coordinates (y grows downwards)
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::South => (0, 1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }
}

impl Slope {
    /// Heading after crossing a cell of this slope
    pub fn redirect(self, heading: Heading) -> Heading {
        match (self, heading) {
            (Slope::Down, Heading::North) => Heading::West,
            (Slope::Down, Heading::West) => Heading::North,
            (Slope::Down, Heading::South) => Heading::East,
            (Slope::Down, Heading::East) => Heading::South,
            (Slope::Up, Heading::North) => Heading::East,
            (Slope::Up, Heading::East) => Heading::North,
            (Slope::Up, Heading::South) => Heading::West,
            (Slope::Up, Heading::West) => Heading::South,
        }
    }
}

/// Virtual cell just outside the border plus the inward heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub col: i64,
    pub row: i64,
    pub heading: Heading,
}

/// A traced trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Walk {
    pub entry: EntryPoint,
    /// Centre of the virtual entry cell
    pub start: Point,
    pub path_data: String,
    /// Number of maze cells crossed
    pub moves: usize,
}

/// Every border entry point, north/south per column then west/east per row
pub fn entry_points(columns: usize, rows: usize) -> Vec<EntryPoint> {
    let (c, r) = (columns as i64, rows as i64);
    let mut points = Vec::with_capacity(2 * (columns + rows));
    for col in 0..c {
        points.push(EntryPoint { col, row: -1, heading: Heading::South });
        points.push(EntryPoint { col, row: r, heading: Heading::North });
    }
    for row in 0..r {
        points.push(EntryPoint { col: -1, row, heading: Heading::East });
        points.push(EntryPoint { col: c, row, heading: Heading::West });
    }
    points
}

fn cell_at(grid: &FillGrid<DiagonalLine>, col: i64, row: i64) -> Option<&DiagonalLine> {
    if col < 0 || row < 0 {
        return None;
    }
    grid.get(col as usize, row as usize)
}

/// Follow the maze from `entry` until the walker leaves the grid
pub fn trace(grid: &FillGrid<DiagonalLine>, entry: EntryPoint, scale: f64, frame: f64) -> Walk {
    let offset = scale / 2.0;
    let start = Point::new(
        entry.col as f64 * scale + frame + offset,
        entry.row as f64 * scale + frame + offset,
    );

    let mut d = format!("M{} {}", num(start.x), num(start.y));
    match entry.heading {
        Heading::South => d.push_str(&format!("v{}", num(offset))),
        Heading::North => d.push_str(&format!("v{}", num(-offset))),
        Heading::East => d.push_str(&format!("h{}", num(offset))),
        Heading::West => d.push_str(&format!("h{}", num(-offset))),
    }

    let (mut col, mut row, mut heading) = (entry.col, entry.row, entry.heading);
    let mut moves = 0;
    loop {
        let (dx, dy) = heading.delta();
        col += dx;
        row += dy;
        let Some(line) = cell_at(grid, col, row) else {
            break;
        };

        // Half a step along the entry heading, half along the exit heading
        let exit = line.slope.redirect(heading);
        let (ex, ey) = exit.delta();
        d.push_str(&format!(
            "l{} {}",
            num(offset * (dx + ex) as f64),
            num(offset * (dy + ey) as f64)
        ));
        heading = exit;
        moves += 1;
        tracing::trace!("New position <{}x{}>, heading {:?}", col, row, heading);
    }

    Walk { entry, start, path_data: d, moves }
}

/// Longest trajectory over all border entry points, visited in shuffled
/// order. Ties keep the walk found first.
pub fn best_path<R: Rng + ?Sized>(
    grid: &FillGrid<DiagonalLine>,
    scale: f64,
    frame: f64,
    rng: &mut R,
) -> Option<Walk> {
    if grid.columns == 0 || grid.rows == 0 {
        return None;
    }

    let mut candidates = entry_points(grid.columns, grid.rows);
    candidates.shuffle(rng);

    let mut best: Option<Walk> = None;
    for entry in candidates {
        let walk = trace(grid, entry, scale, frame);
        if best.as_ref().map_or(true, |b| walk.moves > b.moves) {
            best = Some(walk);
        }
    }
    if let Some(walk) = &best {
        tracing::debug!("Best path enters at {:?} and crosses {} cells", walk.entry, walk.moves);
    }
    best
}
