//! Integer matrices: generation, shape checks and reductions.

mod error;
mod grid;
mod jagged;
mod reduce;

pub use error::MatrixError;
pub use grid::Matrix;
pub use jagged::JaggedMatrix;
