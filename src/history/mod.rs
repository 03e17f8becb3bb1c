//! Undo history.
//!
//! - `History<T>`: cursor buffer with a redeal floor (undo never crosses it)
//! - `GameSnapshot`: what `GapsGame` records after every move and redeal

pub mod buffer;
pub mod snapshot;

pub use buffer::History;
pub use snapshot::GameSnapshot;
