//! Generative Grids - parametric vector artworks rendered as SVG

pub mod cli;
pub mod core;
pub mod generators;
pub mod render;
pub mod spatial;
