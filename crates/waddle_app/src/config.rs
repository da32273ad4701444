//! Waddle configuration file handling (waddle.toml).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Waddle configuration (waddle.toml).
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaddleConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl WaddleConfig {
    /// Load configuration from a waddle.toml file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse waddle.toml")
    }
}

/// Window configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    /// Overlay the renderer's frame-rate meter.
    #[serde(default)]
    pub show_frame_rate_meter: bool,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_title() -> String {
    "waddle".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            show_frame_rate_meter: false,
        }
    }
}

/// Renderer hints passed through to the host engine.
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub hardware_animated_vertices: bool,
    #[serde(default)]
    pub basic_shaders_only: bool,
    /// Engine pipeline threading model.
    #[serde(default = "default_threading_model")]
    pub threading_model: String,
}

fn default_true() -> bool {
    true
}

fn default_threading_model() -> String {
    "Cull/Draw".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hardware_animated_vertices: true,
            basic_shaders_only: false,
            threading_model: default_threading_model(),
        }
    }
}

/// Transient-effect configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct EffectsConfig {
    /// Seed for popup placement jitter. Fixed by default so headless runs
    /// are reproducible; a windowed host may seed from entropy.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    0xD0CC
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self { seed: default_seed() }
    }
}
