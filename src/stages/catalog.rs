use std::fmt;

use crate::config::Config;
use crate::stages::{blur, color_channels, custom, deblur, denoise, equalize, grain, sharpen};

/// The fixed catalog of filter stages.
///
/// The declaration order of [`StageKind::ALL`] is the order stages appear in
/// the chain. Configuration key order never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Equalize,
    ColorChannels,
    SharpenMain,
    SharpenExtra,
    Deblur,
    Denoise,
    Blur,
    Grain,
    Custom,
}

impl StageKind {
    /// Every stage, in chain order
    pub const ALL: [StageKind; 9] = [
        StageKind::Equalize,
        StageKind::ColorChannels,
        StageKind::SharpenMain,
        StageKind::SharpenExtra,
        StageKind::Deblur,
        StageKind::Denoise,
        StageKind::Blur,
        StageKind::Grain,
        StageKind::Custom,
    ];

    /// Stable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Equalize => "eq",
            StageKind::ColorChannels => "color_channels",
            StageKind::SharpenMain => "sharpen",
            StageKind::SharpenExtra => "sharpen_extra",
            StageKind::Deblur => "deblur",
            StageKind::Denoise => "denoise",
            StageKind::Blur => "blur",
            StageKind::Grain => "grain",
            StageKind::Custom => "custom",
        }
    }

    /// Resolve a stage from its [`name`](StageKind::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Build this stage's expression, or `None` when the stage is absent
    pub fn build(self, config: &Config) -> Option<String> {
        match self {
            StageKind::Equalize => equalize::build(config),
            StageKind::ColorChannels => color_channels::build(config),
            StageKind::SharpenMain => sharpen::build_main(config),
            StageKind::SharpenExtra => sharpen::build_extra(config),
            StageKind::Deblur => deblur::build(config),
            StageKind::Denoise => denoise::build(config),
            StageKind::Blur => blur::build(config),
            StageKind::Grain => grain::build(config),
            StageKind::Custom => custom::build(config),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
