//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// 2D position in composition (SVG user) units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point on the circle of `radius` around `self`, using the
    /// `(sin, cos)` angle convention of the arc generator
    pub fn on_circle(&self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.sin(),
            y: self.y + radius * angle.cos(),
        }
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Integer cell coordinate inside a generator grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_on_circle_keeps_radius() {
        let center = Point::new(10.0, -4.0);
        for i in 0..16 {
            let p = center.on_circle(7.5, i as f64 * 0.4);
            assert!((p.distance(&center) - 7.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cell_equality() {
        assert_eq!(Cell::new(1, 2), Cell::new(1, 2));
        assert_ne!(Cell::new(1, 2), Cell::new(2, 1));
    }
}
