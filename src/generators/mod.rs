//! The four artwork generators and their helpers
//!
//! Each generator exposes a config record, a `generate(&config, &mut rng)`
//! entry point and an output type that converts into a `Composition`.

pub mod arc_disc;
pub mod bias;
pub mod maze;
pub mod palette;
pub mod tiles;
pub mod u_grid;
pub mod walk;
