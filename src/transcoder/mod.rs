//! # Transcoder Invocation
//!
//! Runs the external FFmpeg binary with the assembled filter chain.

pub mod command;
pub mod quote;

pub use command::{TranscodeCommand, DEFAULT_PROGRAM};
pub use quote::shell_quote;
