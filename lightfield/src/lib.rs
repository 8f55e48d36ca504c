#![forbid(unsafe_code)]

//! # `lightfield`: per-column light storage
//!
//! Block light and sky light for one chunk column, stored the way beta-format chunks store
//! them: one nibble per block, two blocks per byte, with the vertical axis varying fastest.
//!
//! Coordinates follow the renderer's convention: `x` and `y` are the horizontal axes inside the
//! column (0 to 15) and `z` is the vertical axis (0 up to the world height).

extern crate thiserror;

/// 4-bit light values and packed nibble storage.
pub mod nibbles;

/// Positions inside a chunk column.
pub mod position;

mod dimensions;
mod field;

pub use dimensions::Dimensions;
pub use field::{LightField, LightKind};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("world height must be between 1 and 256, got {0}")]
	InvalidHeight(u32),
	#[error("raw light data for a {height} block high column must be {expected} bytes, got {actual}")]
	RawLength { height: u16, expected: usize, actual: usize },
}
