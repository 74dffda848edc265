//! Typed block values for voxel worlds stored in the legacy
//! `(type id, data)` format.
//!
//! This crate only holds values. Converting them to and from the legacy pair
//! lives in `mcblock-legacy`.

pub mod block;
pub mod error;
pub mod properties;

pub use block::{Block, BlockKind, SimpleBlock};
pub use error::BlockError;
