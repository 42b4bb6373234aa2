use std::path::{Path, PathBuf};

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{ConfigError, FfxError, Result},
    stages::ParamValue,
};

/// File name looked up when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "ffx.yaml";

/// A stage on/off switch.
///
/// Accepts the loose truthy forms older YAML configs use: booleans, numbers
/// (non-zero is on), `yes`/`on`/`true`/`y`/`1` and `no`/`off`/`false`/`n`/`0`
/// in any case, and null (off). Any other string is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(bool);

impl Flag {
    pub fn is_set(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Flag(value)
    }
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = Flag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, a number, yes/no, on/off or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Flag, E> {
        Ok(Flag(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Flag, E> {
        Ok(Flag(value != 0))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Flag, E> {
        Ok(Flag(value != 0))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Flag, E> {
        Ok(Flag(value != 0.0))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Flag, E> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "on" | "true" | "1" => Ok(Flag(true)),
            "no" | "n" | "off" | "false" | "0" | "" => Ok(Flag(false)),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Flag, E> {
        Ok(Flag(false))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Flag, E> {
        Ok(Flag(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Flag, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }
}

/// Effects configuration: one section per filter stage.
///
/// Every section and every option is optional. A section that is missing
/// behaves like an empty one, and an empty one leaves its stage disabled.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brightness / contrast / gamma / saturation
    pub eq: EqConfig,

    /// Per-channel multipliers
    pub color_channels: ColorChannelsConfig,

    /// Main and extra unsharp passes
    pub sharpen: SharpenConfig,

    pub deblur: DeblurConfig,

    pub denoise: DenoiseConfig,

    pub blur: BlurConfig,

    pub grain: GrainConfig,

    /// Pre-formed filter expressions appended verbatim
    pub custom_filters: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EqConfig {
    pub enabled: Flag,
    pub brightness: Option<ParamValue>,
    pub contrast: Option<ParamValue>,
    pub gamma: Option<ParamValue>,
    pub saturation: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorChannelsConfig {
    pub red: Option<ParamValue>,
    pub green: Option<ParamValue>,
    pub blue: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SharpenConfig {
    pub enabled: Flag,
    pub extra_enabled: Flag,
    pub main: SharpenMainConfig,
    pub extra: SharpenExtraConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SharpenMainConfig {
    pub msize_x: Option<ParamValue>,
    pub msize_y: Option<ParamValue>,
    pub amount: Option<ParamValue>,
    pub msize_x_chroma: Option<ParamValue>,
    pub msize_y_chroma: Option<ParamValue>,
    pub amount_chroma: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SharpenExtraConfig {
    /// Used for both the horizontal and the vertical matrix size
    pub msize: Option<ParamValue>,
    pub amount: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeblurConfig {
    pub enabled: Flag,
    /// `convolution` (default) or `unsharp_multi`
    pub method: Option<String>,
    /// 3x3 convolution matrix, space separated
    pub kernel: Option<ParamValue>,
    /// Number of unsharp repetitions for `unsharp_multi`
    pub passes: Option<i64>,
    pub amount: Option<ParamValue>,
    pub msize: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DenoiseConfig {
    pub enabled: Flag,
    pub luma: Option<ParamValue>,
    pub chroma: Option<ParamValue>,
    pub time: Option<ParamValue>,
    pub chroma_time: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub enabled: Flag,
    pub radius: Option<ParamValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GrainConfig {
    pub enabled: Flag,
    pub strength: Option<ParamValue>,
    pub frequency: Option<ParamValue>,
}

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension, falling back to YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl Config {
    /// Load configuration from a YAML or TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FfxError::from(ConfigError::FileNotFound { path: path.display().to_string() })
            } else {
                FfxError::from(e)
            }
        })?;

        let format = ConfigFormat::from_path(path);
        debug!("Parsing {:?} as {:?}", path, format);
        Self::parse(&content, format, &path.display().to_string())
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, ConfigFormat::Yaml, "<yaml>")
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, ConfigFormat::Toml, "<toml>")
    }

    fn parse(content: &str, format: ConfigFormat, origin: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let parsed: std::result::Result<Self, String> = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| {
            ConfigError::ParseFailed { path: origin.to_string(), reason }.into()
        })
    }

    /// Location used when no `--config` is given: `ffx.yaml` in the working
    /// directory, else `ffx.yaml` next to the executable.
    pub fn default_path() -> PathBuf {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return local;
        }

        std::env::current_exe()
            .map(|exe| exe.with_file_name(DEFAULT_CONFIG_FILE))
            .unwrap_or(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_YAML: &str = r#"
eq:
  enabled: true
  brightness: 0.05
  contrast: 1.1
color_channels:
  red: 1.05
sharpen:
  enabled: true
  extra_enabled: false
  main:
    amount: 0.8
  extra:
    msize: 3
deblur:
  enabled: false
  method: unsharp_multi
  passes: 3
grain:
  enabled: true
  frequency: t+u
custom_filters:
  - "crop=100:100:0:0"
  - hflip
"#;

    #[test]
    fn test_default_config_disables_everything() {
        let config = Config::default();
        assert!(!config.eq.enabled.is_set());
        assert!(!config.sharpen.enabled.is_set());
        assert!(!config.sharpen.extra_enabled.is_set());
        assert!(!config.deblur.enabled.is_set());
        assert!(config.custom_filters.is_empty());
        assert!(config.color_channels.red.is_none());
    }

    #[test]
    fn test_parse_yaml_sections() {
        let config = Config::from_yaml_str(SAMPLE_YAML).unwrap();

        assert!(config.eq.enabled.is_set());
        assert_eq!(config.eq.brightness, Some(ParamValue::Float(0.05)));
        assert_eq!(config.eq.gamma, None);
        assert_eq!(config.color_channels.red, Some(ParamValue::Float(1.05)));
        assert_eq!(config.sharpen.main.amount, Some(ParamValue::Float(0.8)));
        assert_eq!(config.sharpen.extra.msize, Some(ParamValue::Integer(3)));
        assert_eq!(config.deblur.method.as_deref(), Some("unsharp_multi"));
        assert_eq!(config.deblur.passes, Some(3));
        assert_eq!(config.grain.frequency, Some(ParamValue::String("t+u".to_string())));
        assert_eq!(config.custom_filters, vec!["crop=100:100:0:0", "hflip"]);
    }

    #[test]
    fn test_parse_toml_sections() {
        let config = Config::from_toml_str(
            r#"
custom_filters = ["hflip"]

[denoise]
enabled = true
luma = 4.0

[sharpen.main]
msize_x = 7
"#,
        )
        .unwrap();

        assert!(config.denoise.enabled.is_set());
        assert_eq!(config.denoise.luma, Some(ParamValue::Float(4.0)));
        assert_eq!(config.sharpen.main.msize_x, Some(ParamValue::Integer(7)));
        assert_eq!(config.custom_filters, vec!["hflip"]);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_yaml_str("  \n").unwrap();
        assert!(!config.eq.enabled.is_set());
        assert!(config.custom_filters.is_empty());
    }

    #[test]
    fn test_truthy_flags() {
        let on = ["true", "yes", "Yes", "ON", "y", "1", "2", "0.5", "\"true\""];
        for value in on {
            let config = Config::from_yaml_str(&format!("eq:\n  enabled: {}\n", value)).unwrap();
            assert!(config.eq.enabled.is_set(), "{} should enable the stage", value);
        }

        let off = ["false", "no", "Off", "n", "0", "0.0", "~", "null", "\"\""];
        for value in off {
            let config = Config::from_yaml_str(&format!("eq:\n  enabled: {}\n", value)).unwrap();
            assert!(!config.eq.enabled.is_set(), "{} should leave the stage off", value);
        }

        let config = Config::from_yaml_str("sharpen:\n  extra_enabled:\n").unwrap();
        assert!(!config.sharpen.extra_enabled.is_set());
    }

    #[test]
    fn test_toml_integer_flag() {
        let config = Config::from_toml_str("[grain]\nenabled = 1\n").unwrap();
        assert!(config.grain.enabled.is_set());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Config::from_yaml_str("vignette:\n  enabled: true\nblur:\n  enabled: true\n").unwrap();
        assert!(config.blur.enabled.is_set());
    }

    #[test]
    fn test_malformed_section_fails() {
        let err = Config::from_yaml_str("eq:\n  enabled: maybe\n").unwrap_err();
        assert!(matches!(err, FfxError::Config(ConfigError::ParseFailed { .. })));

        let err = Config::from_yaml_str("custom_filters: hflip\n").unwrap_err();
        assert!(matches!(err, FfxError::Config(ConfigError::ParseFailed { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, FfxError::Config(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("ffx.yaml");
        std::fs::write(&yaml_path, SAMPLE_YAML).unwrap();
        let config = Config::from_file(&yaml_path).unwrap();
        assert!(config.eq.enabled.is_set());

        let toml_path = dir.path().join("ffx.toml");
        std::fs::write(&toml_path, "[blur]\nenabled = true\nradius = 4\n").unwrap();
        let config = Config::from_file(&toml_path).unwrap();
        assert!(config.blur.enabled.is_set());
        assert_eq!(config.blur.radius, Some(ParamValue::Integer(4)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("ffx")), ConfigFormat::Yaml);
    }
}
