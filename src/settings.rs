//! User settings, loaded from a JSON file.
//!
//! Every field has a default, so a settings file only needs the keys it
//! wants to override.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{FEN_STARTING_POSITION, decode};
use crate::ui::theme;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "CHESSBOARD_SETTINGS";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Position every new game starts from (FEN, six-field or placement only)
    pub start_fen: String,
    pub light_square: u32,
    pub dark_square: u32,
    /// Square colors for the origin and destination of the last move
    pub light_moved: u32,
    pub dark_moved: u32,
    pub hover_border: u32,
    /// Piece size relative to its square
    pub piece_scale: f32,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_fen: FEN_STARTING_POSITION.to_string(),
            light_square: theme::LIGHT_SQUARE,
            dark_square: theme::DARK_SQUARE,
            light_moved: theme::LIGHT_MOVED,
            dark_moved: theme::DARK_MOVED,
            hover_border: theme::HOVER_BORDER,
            piece_scale: theme::PIECE_SCALE,
            sound: true,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).context("settings are not valid JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Settings from the file named by [`SETTINGS_ENV`], or defaults.
    ///
    /// A broken settings file is logged and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("ignoring settings: {err:#}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        decode(&self.start_fen).context("start_fen")?;
        anyhow::ensure!(
            self.piece_scale > 0.0 && self.piece_scale <= 1.0,
            "piece_scale must be in (0, 1], got {}",
            self.piece_scale
        );
        Ok(())
    }

    /// JSON schema of the settings file
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Settings);
        serde_json::to_string_pretty(&schema).context("failed to serialize settings schema")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = Settings::from_json_str(r#"{ "sound": false }"#).unwrap();
        assert!(!settings.sound);
        assert_eq!(settings.start_fen, FEN_STARTING_POSITION);
        assert_eq!(settings.light_square, theme::LIGHT_SQUARE);
    }

    #[test]
    fn test_rejects_bad_start_fen() {
        let err = Settings::from_json_str(r#"{ "start_fen": "8/8/8" }"#).unwrap_err();
        assert!(format!("{err:#}").contains("malformed FEN"));
    }

    #[test]
    fn test_rejects_bad_scale_and_unknown_keys() {
        assert!(Settings::from_json_str(r#"{ "piece_scale": 0.0 }"#).is_err());
        assert!(Settings::from_json_str(r#"{ "colour": 1 }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("chessboard-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "start_fen": "4k3/8/8/8/8/8/8/4K3 b - - 0 1" }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.start_fen, "4k3/8/8/8/8/8/8/4K3 b - - 0 1");

        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = Settings::schema_json().unwrap();
        assert!(schema.contains("start_fen"));
        assert!(schema.contains("piece_scale"));
    }
}
