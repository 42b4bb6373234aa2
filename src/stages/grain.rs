//! Film grain through the `noise` filter.

use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_STRENGTH: i64 = 4;
/// Patterned noise
pub const DEFAULT_FREQUENCY: &str = "p";

pub fn build(config: &Config) -> Option<String> {
    let grain = &config.grain;
    if !grain.enabled.is_set() {
        return None;
    }

    Some(format!(
        "noise=alls={}:allf={}",
        or_default(&grain.strength, DEFAULT_STRENGTH),
        or_default(&grain.frequency, DEFAULT_FREQUENCY),
    ))
}
