//! # ffx
//!
//! Turn a declarative video-effects configuration into a single FFmpeg
//! filter chain and run FFmpeg with it.
//!
//! The configuration has one section per stage (equalize, channel mix,
//! sharpen, deblur, denoise, blur, grain and custom filters). Each stage is
//! built by an independent pure function, and the chain always lists the
//! stages in the same fixed order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffx::{Config, FilterChain, TranscodeCommand};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::from_file("ffx.yaml")?;
//! let chain = FilterChain::build(&config);
//! println!("{}", chain);
//!
//! TranscodeCommand::new("input.mp4", "output.mp4", &chain)
//!     .run()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Configuration model and YAML/TOML loading
//! - [`stages`] - One builder per filter stage, plus the stage catalog
//! - [`chain`] - Ordered assembly of stage expressions
//! - [`transcoder`] - FFmpeg invocation

pub mod chain;
pub mod config;
pub mod error;
pub mod stages;
pub mod transcoder;

// Re-export commonly used types for convenience
pub use crate::{
    chain::FilterChain,
    config::Config,
    error::{FfxError, Result},
    stages::StageKind,
    transcoder::TranscodeCommand,
};
