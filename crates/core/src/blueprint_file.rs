//! Dungeon files on disk.
//!
//! The format follows the file extension:
//! - `.toml`: the blueprint as TOML tables (`[[rooms]]`, `[treasure]`, `[adventurer]`, `[troll]`).
//! - `.json`: the same shape as a JSON object.
//!
//! Saving writes a sibling temp file first and renames it over the target.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::blueprint::DungeonBlueprint;
use crate::dungeon::{Dungeon, DungeonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlueprintFormat {
    Toml,
    Json,
}

impl BlueprintFormat {
    pub fn from_path(path: &Path) -> Result<Self, BlueprintLoadError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(BlueprintLoadError::UnsupportedFormat { extension: extension.to_string() }),
        }
    }

    pub fn parse(self, text: &str) -> Result<DungeonBlueprint, String> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }

    pub fn render(self, blueprint: &DungeonBlueprint) -> Result<String, String> {
        match self {
            Self::Toml => toml::to_string_pretty(blueprint).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(blueprint).map_err(|e| e.to_string()),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// Describes why a dungeon file could not be read, written or built.
#[derive(Debug)]
pub enum BlueprintLoadError {
    Io(io::Error),
    /// The path has no `.toml` or `.json` extension.
    UnsupportedFormat { extension: String },
    Parse { path: String, message: String },
    Serialize { message: String },
    /// The file parsed but does not describe a valid dungeon.
    Invalid(DungeonError),
}

impl fmt::Display for BlueprintLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "dungeon file I/O error: {e}"),
            Self::UnsupportedFormat { extension } if extension.is_empty() => {
                write!(f, "dungeon file needs a .toml or .json extension")
            }
            Self::UnsupportedFormat { extension } => {
                write!(f, "unsupported dungeon file extension .{extension}")
            }
            Self::Parse { path, message } => write!(f, "could not parse {path}: {message}"),
            Self::Serialize { message } => write!(f, "could not serialize dungeon: {message}"),
            Self::Invalid(e) => write!(f, "invalid dungeon: {e}"),
        }
    }
}

impl Error for BlueprintLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BlueprintLoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DungeonError> for BlueprintLoadError {
    fn from(e: DungeonError) -> Self {
        Self::Invalid(e)
    }
}

pub fn load_blueprint(path: &Path) -> Result<DungeonBlueprint, BlueprintLoadError> {
    let format = BlueprintFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let blueprint = format.parse(&text).map_err(|message| BlueprintLoadError::Parse {
        path: path.display().to_string(),
        message,
    })?;
    debug!("loaded {} rooms from {}", blueprint.rooms.len(), path.display());
    Ok(blueprint)
}

/// Loads and validates a dungeon file in one step.
pub fn load_dungeon(path: &Path, seed: u64) -> Result<Dungeon, BlueprintLoadError> {
    Ok(load_blueprint(path)?.build(seed)?)
}

pub fn save_blueprint(path: &Path, blueprint: &DungeonBlueprint) -> Result<(), BlueprintLoadError> {
    let format = BlueprintFormat::from_path(path)?;
    let text =
        format.render(blueprint).map_err(|message| BlueprintLoadError::Serialize { message })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension(format!("{}.tmp", format.extension()));
    if let Err(e) = fs::write(&tmp_path, text).and_then(|()| fs::rename(&tmp_path, path)) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            debug!("could not remove {}: {cleanup}", tmp_path.display());
        }
        return Err(e.into());
    }
    Ok(())
}
