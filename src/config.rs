use crate::services::snapshot::SnapshotFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// World definitions, one per language
    pub conf_dir: PathBuf,
    /// Save slots
    pub save_dir: PathBuf,
    /// e.g. "en"
    pub lang: String,
    /// yaml | json
    pub format: SnapshotFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conf_dir: PathBuf::from("conf"),
            save_dir: PathBuf::from("saves"),
            lang: "en".to_string(),
            format: SnapshotFormat::Yaml,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self =
            toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env");
        let defaults = Self::default();

        let format = match std::env::var("LANTERN_FORMAT") {
            Ok(s) => s.parse().map_err(anyhow::Error::msg).context("LANTERN_FORMAT")?,
            Err(_) => defaults.format,
        };

        let dir = |key: &str, default: PathBuf| {
            std::env::var(key).map(PathBuf::from).unwrap_or(default)
        };
        let cfg = Self {
            conf_dir: dir("LANTERN_CONF_DIR", defaults.conf_dir),
            save_dir: dir("LANTERN_SAVE_DIR", defaults.save_dir),
            lang: std::env::var("LANTERN_LANG").unwrap_or(defaults.lang),
            format,
        };

        Ok(cfg)
    }
}
