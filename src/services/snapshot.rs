//! Reading and writing whole-world snapshots.
//!
//! World definitions (one per language) live in the configuration directory, save slots in
//! the save directory. Both use the same document format.

use crate::config::Config;
use crate::error::SnapshotError;
use crate::models::world::World;
use crate::services::validate::validate_world;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    #[default]
    Yaml,
    Json,
}

impl SnapshotFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Yaml => "yaml",
            SnapshotFormat::Json => "json",
        }
    }

    pub fn decode(&self, text: &str) -> Result<World, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Yaml => serde_yaml::from_str(text)?,
            SnapshotFormat::Json => serde_json::from_str(text)?,
        })
    }

    pub fn encode(&self, world: &World) -> Result<String, SnapshotError> {
        Ok(match self {
            SnapshotFormat::Yaml => serde_yaml::to_string(world)?,
            SnapshotFormat::Json => serde_json::to_string_pretty(world)?,
        })
    }
}

impl core::str::FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            "json" => Ok(SnapshotFormat::Json),
            other => Err(format!("unknown snapshot format: {other}")),
        }
    }
}

/// Decodes, validates and relinks a world. The result is ready to play.
pub fn decode_world(text: &str, format: SnapshotFormat) -> Result<World, SnapshotError> {
    let mut world = format.decode(text)?;
    validate_world(&world)?;
    world.relink()?;
    Ok(world)
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    conf_dir: PathBuf,
    save_dir: PathBuf,
    format: SnapshotFormat,
}

impl SnapshotStore {
    pub fn new(
        conf_dir: impl Into<PathBuf>,
        save_dir: impl Into<PathBuf>,
        format: SnapshotFormat,
    ) -> Self {
        Self {
            conf_dir: conf_dir.into(),
            save_dir: save_dir.into(),
            format,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.conf_dir, &cfg.save_dir, cfg.format)
    }

    /// Languages with a world definition in the configuration directory, sorted.
    pub fn languages(&self) -> Result<Vec<String>, SnapshotError> {
        let ext = self.format.extension();
        let mut langs = Vec::new();
        for entry in fs::read_dir(&self.conf_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                langs.push(stem.to_string());
            }
        }
        langs.sort();
        Ok(langs)
    }

    /// Fresh world for a language.
    pub fn load_language(&self, lang: &str) -> Result<World, SnapshotError> {
        let path = self.file_in(&self.conf_dir, lang)?;
        self.load_file(&path)
    }

    pub fn load_slot(&self, slot: &str) -> Result<World, SnapshotError> {
        let path = self.slot_path(slot)?;
        self.load_file(&path)
    }

    pub fn load_file(&self, path: &Path) -> Result<World, SnapshotError> {
        let text = fs::read_to_string(path)?;
        let world = decode_world(&text, self.format)?;
        tracing::info!(path = %path.display(), rooms = world.rooms.len(), "world loaded");
        Ok(world)
    }

    /// Writes the world to a slot. The file is written next to its target and renamed into
    /// place, so a failed write never leaves a truncated slot behind.
    pub fn save_slot(&self, world: &World, slot: &str) -> Result<PathBuf, SnapshotError> {
        let path = self.slot_path(slot)?;
        let data = self.format.encode(world)?;

        fs::create_dir_all(&self.save_dir)?;
        let tmp = path.with_extension(format!("{}.tmp", self.format.extension()));
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::info!(path = %path.display(), "world saved");
        Ok(path)
    }

    pub fn slot_path(&self, slot: &str) -> Result<PathBuf, SnapshotError> {
        self.file_in(&self.save_dir, slot)
    }

    fn file_in(&self, dir: &Path, name: &str) -> Result<PathBuf, SnapshotError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(SnapshotError::InvalidSlot(name.to_string()));
        }
        Ok(dir.join(format!("{name}.{}", self.format.extension())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::RoomId;

    const WORLD: &str = r#"
name: Tiny
description: A tiny world.
current_room_id: 2
rooms:
  - id: 1
    name: Hall
    exits:
      - name: door
        direction: east
        room_id: 2
  - id: 2
    name: Kitchen
    exits:
      - name: door
        direction: west
        room_id: 1
"#;

    #[test]
    fn decode_relinks_current_room() {
        let world = decode_world(WORLD, SnapshotFormat::Yaml).unwrap();
        assert_eq!(world.current_room().id, RoomId(2));
        assert!(world.current_room().entered);
        assert!(!world.saved_game);
    }

    #[test]
    fn decode_fails_on_dangling_exit() {
        let broken = WORLD.replace("room_id: 1", "room_id: 5");
        assert!(matches!(
            decode_world(&broken, SnapshotFormat::Yaml),
            Err(SnapshotError::WorldInvalid(_))
        ));
    }

    #[test]
    fn json_and_yaml_agree() {
        let world = decode_world(WORLD, SnapshotFormat::Yaml).unwrap();
        let json = SnapshotFormat::Json.encode(&world).unwrap();
        let again = decode_world(&json, SnapshotFormat::Json).unwrap();
        assert_eq!(world, again);
    }

    #[test]
    fn slot_names_must_be_plain() {
        let store = SnapshotStore::new("conf", "saves", SnapshotFormat::Yaml);
        assert_eq!(store.slot_path("game1").unwrap(), PathBuf::from("saves/game1.yaml"));
        for bad in ["", ".", "..", "../etc/passwd", "a\\b"] {
            assert!(matches!(store.slot_path(bad), Err(SnapshotError::InvalidSlot(_))), "{bad}");
        }
    }

    #[test]
    fn format_parses_from_str() {
        assert_eq!("YML".parse::<SnapshotFormat>(), Ok(SnapshotFormat::Yaml));
        assert_eq!("json".parse::<SnapshotFormat>(), Ok(SnapshotFormat::Json));
        assert!("toml".parse::<SnapshotFormat>().is_err());
    }
}
