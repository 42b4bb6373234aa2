//! `eq` stage: brightness, contrast, gamma and saturation.

use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_BRIGHTNESS: f64 = 0.0;
pub const DEFAULT_CONTRAST: f64 = 1.0;
pub const DEFAULT_GAMMA: f64 = 1.0;
pub const DEFAULT_SATURATION: f64 = 1.0;

pub fn build(config: &Config) -> Option<String> {
    let eq = &config.eq;
    if !eq.enabled.is_set() {
        return None;
    }

    Some(format!(
        "eq=brightness={}:contrast={}:gamma={}:saturation={}",
        or_default(&eq.brightness, DEFAULT_BRIGHTNESS),
        or_default(&eq.contrast, DEFAULT_CONTRAST),
        or_default(&eq.gamma, DEFAULT_GAMMA),
        or_default(&eq.saturation, DEFAULT_SATURATION),
    ))
}
