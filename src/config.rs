//! Runtime configuration
//!
//! Every field falls back to the documented default, so a config file only
//! needs the values it wants to change.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, bail};
use serde::Deserialize;

use crate::consts::{
    BOSS_SCORE_INTERVAL, ENEMY_SPAWN_CHANCE, FIELD_HEIGHT, FIELD_WIDTH, FRAME_RATE,
};
use crate::entities::Field;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Logical frames per second
    pub frame_rate: u32,
    /// Chance per tick of a regular enemy appearing
    pub spawn_chance: f64,
    pub boss_score_interval: u32,
    /// Spawn RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Force the ASCII glyph set
    pub ascii_glyphs: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            frame_rate: FRAME_RATE,
            spawn_chance: ENEMY_SPAWN_CHANCE,
            boss_score_interval: BOSS_SCORE_INTERVAL,
            seed: None,
            ascii_glyphs: false,
        }
    }
}

impl GameConfig {
    /// Loads a JSON config file
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).wrap_err_with(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> color_eyre::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> color_eyre::Result<()> {
        if self.frame_rate == 0 {
            bail!("frame_rate must be positive");
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            bail!("spawn_chance must be within 0..=1, got {}", self.spawn_chance);
        }
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            bail!(
                "field must have a positive size, got {}x{}",
                self.field_width,
                self.field_height
            );
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }
}
