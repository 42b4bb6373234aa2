use std::fmt;

use serde::Deserialize;

/// A scalar option value as written in the configuration file.
///
/// Values are interpolated into stage expressions without range checks, so
/// the variant the user wrote decides how the value is rendered: integers
/// stay integral (`5`), floats always carry a fractional part (`1.0`,
/// `0.6`) or an exponent (`1e-05`), booleans are `True`/`False` and strings
/// are passed through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl ParamValue {
    /// Numeric view of the value, used for identity comparisons
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Integer(i) => Some(*i as f64),
            ParamValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Resolve an optional option against its documented default.
pub fn or_default(value: &Option<ParamValue>, default: impl Into<ParamValue>) -> ParamValue {
    value.clone().unwrap_or_else(|| default.into())
}

/// Shortest round-trip form with a fractional part, switching to
/// exponent notation (`1e+16`, `1e-05`) outside `1e-4 <= |x| < 1e16`.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if value != 0.0 {
        let exponential = format!("{:e}", value);
        if let Some((mantissa, exponent)) = exponential.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if !(-4..16).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
                }
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Float(x) => f.write_str(&format_float(*x)),
            ParamValue::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            ParamValue::String(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}
