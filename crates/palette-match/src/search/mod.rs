//! Nearest-match search
//!
//! [`SearchContext`] is the usual entry point. The free functions work on a
//! bare slice of samples for callers that manage their own palettes.

mod context;
mod nearest;

pub use context::SearchContext;
pub use nearest::{nearest, nearest_index};
