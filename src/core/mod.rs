pub mod config;
pub mod error;
pub mod random;
pub mod types;

pub use error::{GenError, Result};
pub use types::Point;
