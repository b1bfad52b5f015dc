//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::export::{ExportSettings, PageGeometry, RasterOptions};

const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_THEME_FILE: &str = "vilex-theme.json";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("page geometry must be positive, got {width} x {height} mm")]
    InvalidPageGeometry { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub export: ExportSettings,
    /// Directory exported files are saved into.
    pub output_dir: PathBuf,
    /// Path of the persisted theme preference.
    pub theme_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export: ExportSettings::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            theme_file: PathBuf::from(DEFAULT_THEME_FILE),
        }
    }
}

impl AppConfig {
    /// Read `VILEX_*` variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let page = PageGeometry {
            width: parse_or(&lookup, "VILEX_PAGE_WIDTH_MM", defaults.export.page.width),
            height: parse_or(&lookup, "VILEX_PAGE_HEIGHT_MM", defaults.export.page.height),
        };
        if !(page.width > 0.0 && page.height > 0.0) {
            return Err(ConfigError::InvalidPageGeometry {
                width: page.width,
                height: page.height,
            });
        }

        let raster = RasterOptions {
            scale: parse_or(&lookup, "VILEX_RASTER_SCALE", defaults.export.raster.scale),
            background: lookup("VILEX_RASTER_BACKGROUND")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.export.raster.background),
        };
        let jpeg_quality = parse_or(&lookup, "VILEX_JPEG_QUALITY", defaults.export.jpeg_quality)
            .clamp(0.0, 1.0);

        Ok(Self {
            export: ExportSettings {
                page,
                raster,
                jpeg_quality,
            },
            output_dir: lookup("VILEX_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            theme_file: lookup("VILEX_THEME_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.theme_file),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} is not a valid number ('{}'), using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.export.page, PageGeometry::A4);
        assert_eq!(config.export.raster.scale, 2.0);
        assert_eq!(config.export.raster.background, "#ffffff");
        assert_eq!(config.export.jpeg_quality, 0.95);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("VILEX_PAGE_WIDTH_MM", "216"),
            ("VILEX_PAGE_HEIGHT_MM", "279"),
            ("VILEX_RASTER_SCALE", "3"),
            ("VILEX_OUTPUT_DIR", "/tmp/exports"),
        ]))
        .unwrap();
        assert_eq!(config.export.page.width, 216.0);
        assert_eq!(config.export.page.height, 279.0);
        assert_eq!(config.export.raster.scale, 3.0);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_unparseable_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("VILEX_RASTER_SCALE", "big"),
            ("VILEX_JPEG_QUALITY", "7"),
        ]))
        .unwrap();
        assert_eq!(config.export.raster.scale, 2.0);
        assert_eq!(config.export.jpeg_quality, 1.0);
    }

    #[test]
    fn test_rejects_non_positive_page() {
        let err = AppConfig::from_lookup(lookup(&[("VILEX_PAGE_HEIGHT_MM", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPageGeometry {
                width: 210.0,
                height: 0.0
            }
        );
    }
}
