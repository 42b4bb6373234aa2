//! Unsharp-mask sharpening.
//!
//! The main pass takes all six positional `unsharp` options. The extra pass
//! is a lighter second `unsharp` whose single `msize` sets both the
//! horizontal and the vertical matrix size.

use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_MSIZE_X: i64 = 5;
pub const DEFAULT_MSIZE_Y: i64 = 5;
pub const DEFAULT_AMOUNT: f64 = 0.6;
pub const DEFAULT_MSIZE_X_CHROMA: i64 = 5;
pub const DEFAULT_MSIZE_Y_CHROMA: i64 = 5;
pub const DEFAULT_AMOUNT_CHROMA: f64 = 0.1;

pub const DEFAULT_EXTRA_MSIZE: i64 = 3;
pub const DEFAULT_EXTRA_AMOUNT: f64 = 0.4;

/// `unsharp=X:Y:A:XC:YC:AC`, present when `sharpen.enabled`
pub fn build_main(config: &Config) -> Option<String> {
    if !config.sharpen.enabled.is_set() {
        return None;
    }

    let main = &config.sharpen.main;
    Some(format!(
        "unsharp={}:{}:{}:{}:{}:{}",
        or_default(&main.msize_x, DEFAULT_MSIZE_X),
        or_default(&main.msize_y, DEFAULT_MSIZE_Y),
        or_default(&main.amount, DEFAULT_AMOUNT),
        or_default(&main.msize_x_chroma, DEFAULT_MSIZE_X_CHROMA),
        or_default(&main.msize_y_chroma, DEFAULT_MSIZE_Y_CHROMA),
        or_default(&main.amount_chroma, DEFAULT_AMOUNT_CHROMA),
    ))
}

/// `unsharp=M:M:A`, present when `sharpen.extra_enabled`
pub fn build_extra(config: &Config) -> Option<String> {
    if !config.sharpen.extra_enabled.is_set() {
        return None;
    }

    let extra = &config.sharpen.extra;
    let msize = or_default(&extra.msize, DEFAULT_EXTRA_MSIZE);
    Some(format!(
        "unsharp={}:{}:{}",
        msize,
        msize,
        or_default(&extra.amount, DEFAULT_EXTRA_AMOUNT),
    ))
}
