use iconscale::Filter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

#[derive(Clone, Debug)]
pub struct Config {
    pub fail_on_error: bool,
    pub generate: GenerateConfig,
    pub embed: EmbedConfig,
    pub placeholder: PlaceholderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on_error: true,
            generate: Default::default(),
            embed: Default::default(),
            placeholder: Default::default(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "icons.yaml";

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn parse<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        // an empty document deserializes to unit, not to an empty map
        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        let config: RawConfig = serde_yaml::from_str(contents)?;
        Ok(Self {
            fail_on_error: config.fail_on_error.unwrap_or(true),
            generate: config.generate.unwrap_or_default(),
            embed: config.embed.unwrap_or_default(),
            placeholder: config.placeholder.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    fail_on_error: Option<bool>,
    generate: Option<GenerateConfig>,
    embed: Option<EmbedConfig>,
    placeholder: Option<PlaceholderConfig>,
}

/// Inputs of `generate-icons`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub filter: Filter,
    pub optimize: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source: Path::new("public").join("source-logo.png"),
            output_dir: Path::new("public").join("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            filter: Filter::Lanczos3,
            optimize: false,
        }
    }
}

/// Inputs of `embed-icon-svg`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub size: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        let icons = Path::new("public").join("icons");
        Self {
            input: icons.join("icon128.png"),
            output: icons.join("kotodama-button.svg"),
            size: svgicon::DEFAULT_SIZE,
        }
    }
}

/// Inputs of `placeholder-icons`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub color: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            output_dir: Path::new("public").join("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            color: "#1d9bf0".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::parse(dir.path().join(Config::FILE_NAME)).unwrap();
        assert!(config.fail_on_error);
        assert_eq!(config.generate.sizes, [16, 32, 48, 128]);
        assert_eq!(config.generate.filter, Filter::Lanczos3);
        assert_eq!(config.embed.size, 128);
        assert_eq!(config.embed.input, Path::new("public/icons/icon128.png"));
        assert_eq!(config.placeholder.color, "#1d9bf0");
    }

    #[test]
    fn test_empty_file() {
        let config = Config::from_yaml("\n").unwrap();
        assert!(config.fail_on_error);
        assert_eq!(config.generate.source, Path::new("public/source-logo.png"));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_yaml(
            r#"
fail_on_error: false
generate:
  sizes: [64]
  filter: catmull-rom
embed:
  output: dist/button.svg
"#,
        )
        .unwrap();
        assert!(!config.fail_on_error);
        assert_eq!(config.generate.sizes, [64]);
        assert_eq!(config.generate.filter, Filter::CatmullRom);
        assert_eq!(config.generate.output_dir, Path::new("public/icons"));
        assert_eq!(config.embed.output, Path::new("dist/button.svg"));
        assert_eq!(config.embed.input, Path::new("public/icons/icon128.png"));
        assert_eq!(config.placeholder.sizes, [16, 32, 48, 128]);
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Config::FILE_NAME);
        std::fs::write(&path, "placeholder:\n  color: \"#000000\"\n").unwrap();
        let config = Config::parse(&path).unwrap();
        assert_eq!(config.placeholder.color, "#000000");
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::from_yaml("generate:\n  size: [16]\n").is_err());
        assert!(Config::from_yaml("generate:\n  filter: bicubic\n").is_err());
    }
}
