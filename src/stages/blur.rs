use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_RADIUS: i64 = 2;

/// `boxblur=R`
pub fn build(config: &Config) -> Option<String> {
    if !config.blur.enabled.is_set() {
        return None;
    }

    Some(format!("boxblur={}", or_default(&config.blur.radius, DEFAULT_RADIUS)))
}
