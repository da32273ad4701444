//! Scenario definition for headless diagnostics.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use waddle_core::Key;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Scenario step set for duck diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Advance a number of frames.
    Tick { frames: u64 },
    /// Advance enough frames to cover the given wall time.
    Wait { ms: u64 },
    /// Press a named key ("space", "b", "enter", "x").
    Press { key: String },
    /// The duck is within `within` of its rest pose and still.
    AssertSettled { within: f64 },
    /// The duck's altitude is above `z`.
    AssertAltitudeAbove { z: f64 },
    /// Exactly this many transient effects are alive.
    AssertEffectCount { expected: usize },
}

/// Map a scenario key name to a key code.
pub fn parse_key(name: &str) -> Option<Key> {
    match name {
        "space" => Some(Key::SPACE),
        "enter" => Some(Key::ENTER),
        "b" => Some(Key::B),
        "x" => Some(Key::X),
        _ => None,
    }
}
