//! Per-channel gain through `eq`'s channel multipliers.
//!
//! This stage has no `enabled` flag. It is skipped when every multiplier is
//! exactly one, since the filter would then be a no-op.

use crate::config::Config;
use crate::stages::value::{or_default, ParamValue};

pub const DEFAULT_RED: f64 = 1.0;
pub const DEFAULT_GREEN: f64 = 1.0;
pub const DEFAULT_BLUE: f64 = 1.0;

fn is_identity(value: &ParamValue) -> bool {
    value.as_f64() == Some(1.0)
}

pub fn build(config: &Config) -> Option<String> {
    let channels = &config.color_channels;
    let red = or_default(&channels.red, DEFAULT_RED);
    let green = or_default(&channels.green, DEFAULT_GREEN);
    let blue = or_default(&channels.blue, DEFAULT_BLUE);

    if [&red, &green, &blue].into_iter().all(is_identity) {
        return None;
    }

    Some(format!("eq=red_mul={}:green_mul={}:blue_mul={}", red, green, blue))
}
