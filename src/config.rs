use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::logging::LogLevel;

/// Environment variable naming the directory holding the BMP and mapping files.
pub const ASSET_DIR_VAR: &str = "CONTROLLERMAP_ASSET_DIR";
/// Environment variable holding the numeric log level (0-6).
pub const LOG_LEVEL_VAR: &str = "CONTROLLERMAP_LOG";

#[cfg(target_os = "ios")]
const SCREEN_WIDTH: u32 = 480;
#[cfg(not(target_os = "ios"))]
const SCREEN_WIDTH: u32 = 512;
const SCREEN_HEIGHT: u32 = 320;

/// Application options that can be set via environment or CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub asset_dir: PathBuf,
    pub mapping_file: String,
    pub background_image: String,
    pub button_image: String,
    pub axis_image: String,
    pub resolution: Resolution,
    pub dump_mappings: bool,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            mapping_file: "gamecontrollerdb.txt".to_string(),
            background_image: "controllermap.bmp".to_string(),
            button_image: "button.bmp".to_string(),
            axis_image: "axis.bmp".to_string(),
            resolution: Resolution {
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
            },
            dump_mappings: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Options {
    /// Resolve an asset file name against the asset directory.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join(file)
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.asset_path(&self.mapping_file)
    }
}

/// Load options from the environment on top of the defaults.
pub fn load_config() -> Result<Options> {
    load_config_from(|key| env::var(key).ok())
}

/// Same as [`load_config`] with an injectable variable lookup.
pub fn load_config_from<F>(lookup: F) -> Result<Options>
where
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Options::default();

    if let Some(dir) = lookup(ASSET_DIR_VAR) {
        if !dir.is_empty() {
            opts.asset_dir = Path::new(&dir).to_path_buf();
        }
    }

    if let Some(level) = lookup(LOG_LEVEL_VAR) {
        opts.log_level = parse_log_level(&level)?;
    }

    Ok(opts)
}

/// Parse a numeric log level in the range 0-6.
pub fn parse_log_level(s: &str) -> Result<LogLevel> {
    let level: i32 = s.trim().parse().context("Invalid log level")?;
    if !(0..=6).contains(&level) {
        anyhow::bail!("Log level out of range (0 to 6)");
    }
    Ok(LogLevel::from_i32(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.resolution.height, 320);
        assert!(!opts.dump_mappings);
        assert_eq!(opts.mapping_path(), PathBuf::from("./gamecontrollerdb.txt"));
    }

    #[cfg(not(target_os = "ios"))]
    #[test]
    fn test_default_resolution_desktop() {
        assert_eq!(Options::default().resolution.width, 512);
    }

    #[test]
    fn test_load_config_without_environment() {
        let opts = load_config_from(|_| None).unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn test_load_config_asset_dir() {
        let opts = load_config_from(|key| match key {
            ASSET_DIR_VAR => Some("/usr/share/controllermap".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            opts.asset_path("axis.bmp"),
            PathBuf::from("/usr/share/controllermap/axis.bmp")
        );
    }

    #[test]
    fn test_load_config_empty_asset_dir_ignored() {
        let opts = load_config_from(|key| match key {
            ASSET_DIR_VAR => Some(String::new()),
            _ => None,
        })
        .unwrap();
        assert_eq!(opts.asset_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_config_log_level() {
        let opts = load_config_from(|key| match key {
            LOG_LEVEL_VAR => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(opts.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("loud").is_err());
        assert!(parse_log_level("7").is_err());
        assert!(parse_log_level("-1").is_err());
        assert_eq!(parse_log_level(" 2 ").unwrap(), LogLevel::Error);
    }
}
