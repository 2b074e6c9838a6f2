use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::words::WordScale;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "RUSTY_CLASSROOM_CONFIG";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field is optional in the file.
///
/// ```json
/// {
///   "window": { "width": 1200, "height": 800 },
///   "number_line": { "min": 0, "max": 100, "interval": 10 },
///   "word_cloud": { "base_size": 10, "size_step": 10, "max_size": 96 },
///   "whiteboard": { "pen_width": 3, "export_width": 1600, "export_height": 1000 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub number_line: NumberLineConfig,
    pub word_cloud: WordCloudConfig,
    pub whiteboard: WhiteboardConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberLineConfig {
    pub min: i64,
    pub max: i64,
    pub interval: i64,
}

impl Default for NumberLineConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            interval: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    pub base_size: f32,
    pub size_step: f32,
    pub max_size: f32,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        let scale = WordScale::default();
        Self {
            base_size: scale.base,
            size_step: scale.step,
            max_size: scale.max,
        }
    }
}

impl WordCloudConfig {
    pub fn scale(&self) -> WordScale {
        WordScale {
            base: self.base_size,
            step: self.size_step,
            max: self.max_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    pub pen_width: f32,
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            pen_width: 3.0,
            export_width: 1600,
            export_height: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Like `from_file`, but a missing file is `Ok(None)`.
    pub fn from_optional_file(path: &Path) -> Result<Option<Self>> {
        match Self::from_file(path) {
            Ok(cfg) => Ok(Some(cfg)),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Config from `$RUSTY_CLASSROOM_CONFIG`, or defaults. A missing file
    /// falls back quietly; a broken one is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::from_optional_file(path) {
            Ok(Some(cfg)) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            Ok(None) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.root_cause()
        .downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_json(r#"{ "number_line": { "max": 20 }, "word_cloud": { "size_step": 4 } }"#)
            .unwrap();
        assert_eq!(cfg.number_line, NumberLineConfig { min: 0, max: 20, interval: 10 });
        assert_eq!(
            cfg.word_cloud.scale(),
            WordScale {
                base: 10.0,
                step: 4.0,
                max: 96.0
            }
        );
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ \"window\": 3 }").is_err());
        assert!(AppConfig::from_file(Path::new("/nonexistent/classroom.json")).is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let missing = Path::new("/nonexistent/classroom.json");
        assert_eq!(AppConfig::from_optional_file(missing).unwrap(), None);
    }

    #[test]
    fn broken_file_is_still_an_error() {
        let path = std::env::temp_dir().join("rusty_classroom_broken_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = AppConfig::from_optional_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());

        let path = std::env::temp_dir().join("rusty_classroom_good_config.json");
        std::fs::write(&path, r#"{ "window": { "width": 640 } }"#).unwrap();
        let cfg = AppConfig::from_optional_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.map(|c| c.window.width), Some(640.0));
    }
}
