//! Deblurring, either as a single sharpening convolution or as repeated
//! unsharp passes.

use tracing::warn;

use crate::config::Config;
use crate::stages::value::or_default;

pub const DEFAULT_METHOD: &str = "convolution";
pub const DEFAULT_KERNEL: &str = "-1 -1 -1 -1 9 -1 -1 -1 -1";
pub const DEFAULT_PASSES: i64 = 2;
pub const DEFAULT_AMOUNT: f64 = 1.0;
pub const DEFAULT_MSIZE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeblurMethod {
    /// `convolution='K'`
    Convolution,
    /// `passes` copies of `unsharp=M:M:A`
    UnsharpMulti,
}

impl DeblurMethod {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "convolution" => Some(Self::Convolution),
            "unsharp_multi" => Some(Self::UnsharpMulti),
            _ => None,
        }
    }
}

/// Expressions for each pass, in order.
///
/// `unsharp_multi` with zero or negative `passes` yields an empty list.
pub fn build_passes(config: &Config) -> Option<Vec<String>> {
    let deblur = &config.deblur;
    if !deblur.enabled.is_set() {
        return None;
    }

    let name = deblur.method.as_deref().unwrap_or(DEFAULT_METHOD);
    let Some(method) = DeblurMethod::parse(name) else {
        // an unknown method contributes nothing
        warn!("Unknown deblur method '{}', skipping deblur stage", name);
        return None;
    };

    match method {
        DeblurMethod::Convolution => {
            let kernel = or_default(&deblur.kernel, DEFAULT_KERNEL);
            Some(vec![format!("convolution='{}'", kernel)])
        }
        DeblurMethod::UnsharpMulti => {
            let passes = deblur.passes.unwrap_or(DEFAULT_PASSES).max(0) as usize;
            let msize = or_default(&deblur.msize, DEFAULT_MSIZE);
            let amount = or_default(&deblur.amount, DEFAULT_AMOUNT);
            let pass = format!("unsharp={}:{}:{}", msize, msize, amount);
            Some(vec![pass; passes])
        }
    }
}

/// The passes flattened into a single `,`-joined expression
pub fn build(config: &Config) -> Option<String> {
    build_passes(config).map(|passes| passes.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::ParamValue;

    fn enabled(method: Option<&str>) -> Config {
        let mut config = Config::default();
        config.deblur.enabled = true.into();
        config.deblur.method = method.map(str::to_string);
        config
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(DeblurMethod::parse("convolution"), Some(DeblurMethod::Convolution));
        assert_eq!(DeblurMethod::parse("unsharp_multi"), Some(DeblurMethod::UnsharpMulti));
        assert_eq!(DeblurMethod::parse("Convolution"), None);
    }

    #[test]
    fn test_disabled() {
        let mut config = enabled(None);
        config.deblur.enabled = false.into();
        assert_eq!(build(&config), None);
    }

    #[test]
    fn test_convolution_is_default_method() {
        assert_eq!(
            build(&enabled(None)).as_deref(),
            Some("convolution='-1 -1 -1 -1 9 -1 -1 -1 -1'")
        );
    }

    #[test]
    fn test_custom_kernel() {
        let mut config = enabled(Some("convolution"));
        config.deblur.kernel = Some(ParamValue::from("0 -1 0 -1 5 -1 0 -1 0"));
        assert_eq!(build(&config).as_deref(), Some("convolution='0 -1 0 -1 5 -1 0 -1 0'"));
    }

    #[test]
    fn test_unsharp_multi_defaults() {
        assert_eq!(
            build(&enabled(Some("unsharp_multi"))).as_deref(),
            Some("unsharp=5:5:1.0,unsharp=5:5:1.0")
        );
    }

    #[test]
    fn test_unsharp_multi_three_passes() {
        let mut config = enabled(Some("unsharp_multi"));
        config.deblur.passes = Some(3);
        config.deblur.amount = Some(ParamValue::Float(1.0));
        config.deblur.msize = Some(ParamValue::Integer(5));

        let passes = build_passes(&config).unwrap();
        assert_eq!(passes.len(), 3);
        assert_eq!(
            build(&config).as_deref(),
            Some("unsharp=5:5:1.0,unsharp=5:5:1.0,unsharp=5:5:1.0")
        );
    }

    #[test]
    fn test_zero_passes_is_empty() {
        let mut config = enabled(Some("unsharp_multi"));
        config.deblur.passes = Some(0);
        assert_eq!(build(&config).as_deref(), Some(""));

        config.deblur.passes = Some(-4);
        assert_eq!(build_passes(&config), Some(vec![]));
    }

    #[test]
    fn test_unknown_method_contributes_nothing() {
        assert_eq!(build(&enabled(Some("unknown"))), None);
    }
}
