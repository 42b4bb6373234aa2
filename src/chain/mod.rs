//! # Filter Chain
//!
//! Assembles stage expressions into the single `-vf` argument handed to the
//! transcoder.

pub mod builder;

// Re-exports for convenience
pub use builder::{normalize_fragment, FilterChain, SEPARATOR};
