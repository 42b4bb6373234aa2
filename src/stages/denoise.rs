use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_LUMA: f64 = 2.0;
pub const DEFAULT_CHROMA: f64 = 1.5;
pub const DEFAULT_TIME: f64 = 3.0;
pub const DEFAULT_CHROMA_TIME: f64 = 0.0;

/// `hqdn3d=L:C:T:CT`: spatial luma/chroma then temporal luma/chroma strength
pub fn build(config: &Config) -> Option<String> {
    let denoise = &config.denoise;
    if !denoise.enabled.is_set() {
        return None;
    }

    Some(format!(
        "hqdn3d={}:{}:{}:{}",
        or_default(&denoise.luma, DEFAULT_LUMA),
        or_default(&denoise.chroma, DEFAULT_CHROMA),
        or_default(&denoise.time, DEFAULT_TIME),
        or_default(&denoise.chroma_time, DEFAULT_CHROMA_TIME),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::ParamValue;

    #[test]
    fn test_defaults() {
        let mut config = Config::default();
        config.denoise.enabled = true.into();
        assert_eq!(build(&config).as_deref(), Some("hqdn3d=2.0:1.5:3.0:0.0"));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.denoise.enabled = true.into();
        config.denoise.luma = Some(ParamValue::Integer(4));
        config.denoise.chroma_time = Some(ParamValue::Float(4.5));
        assert_eq!(build(&config).as_deref(), Some("hqdn3d=4:1.5:3.0:4.5"));
    }

    #[test]
    fn test_disabled() {
        let mut config = Config::default();
        config.denoise.luma = Some(ParamValue::Integer(4));
        assert_eq!(build(&config), None);
    }
}
