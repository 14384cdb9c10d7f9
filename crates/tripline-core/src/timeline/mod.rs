//! Timeline geometry.
//!
//! This module provides:
//! - Overlap layout: column assignment so concurrent entries never collide
//! - Block detection: maximal runs of time-contiguous entries

mod block;
mod layout;

pub use block::{find_block, Block, BLOCK_GAP_TOLERANCE_MINUTES};
pub use layout::{assign_columns, LayoutResult, LayoutSpan};
