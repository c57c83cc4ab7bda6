//! Grid storage shared by the cell-based generators

pub mod grid;

pub use grid::FillGrid;
