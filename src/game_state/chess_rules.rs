//! Rule constants and the configurable parts of the rule set.
//!
//! Holds the standard starting layout and [`RulesConfig`], which can be
//! loaded from TOML:
//!
//! ```toml
//! first_player = "light"
//! light_orientation = 1
//! double_step = "unmoved_only"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Orientation};

/// Standard 8x8 setup, row 0 first. Dark (uppercase) starts on top, light
/// (lowercase) on the bottom and moves toward row 0.
pub const STARTING_POSITION: [&str; 8] = [
    "RNBQKBNR",
    "PPPPPPPP",
    "........",
    "........",
    "........",
    "........",
    "pppppppp",
    "rnbqkbnr",
];

/// When a pawn may advance two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleStepRule {
    /// Only a pawn that has never moved.
    #[default]
    UnmovedOnly,
    /// Any pawn, regardless of history.
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub first_player: Color,
    /// Orientation of the light side. Dark always uses the opposite sign.
    pub light_orientation: Orientation,
    pub double_step: DoubleStepRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_player: Color::Light,
            light_orientation: Orientation::FORWARD,
            double_step: DoubleStepRule::UnmovedOnly,
        }
    }
}

impl RulesConfig {
    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        toml::from_str(text).map_err(|e| ChessErrors::InvalidRulesConfig(e.to_string()))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ChessErrors::InvalidRulesConfig(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn orientation_of(&self, color: Color) -> Orientation {
        match color {
            Color::Light => self.light_orientation,
            Color::Dark => self.light_orientation.flipped(),
        }
    }
}
