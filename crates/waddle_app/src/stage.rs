//! Declarative stage description for the host engine.
//!
//! The engine adapter reads this once at startup and builds the actual scene
//! from it: clear color, one shadow-casting key light, the duck model, and
//! the card used for kiss hearts. Nothing here issues engine calls.

use serde::{Deserialize, Serialize};

/// Scene file for the duck model.
pub const DUCK_MODEL: &str = "roundDuck.bam";

/// Texture for the kiss heart sprite.
pub const HEART_TEXTURE: &str = "heart.png";

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }
}

/// One directional key light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLightSpec {
    /// Blackbody color temperature in kelvin.
    pub color_temperature_k: f64,
    /// Orientation in degrees: heading, pitch, roll.
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    /// Square shadow map resolution, or `None` for no shadows.
    pub shadow_map_size: Option<u32>,
}

/// Screen-space quad bounds for a sprite card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardFrame {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// A textured screen-space card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSpec {
    pub texture: String,
    pub frame: CardFrame,
}

/// Everything the engine adapter needs to dress the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    pub background: Rgb,
    pub key_light: DirectionalLightSpec,
    pub duck_model: String,
    pub heart_sprite: SpriteSpec,
}

impl Default for StageSpec {
    /// The set the duck ships with: warm pink backdrop, daylight key light
    /// from high over the left shoulder, small heart cards.
    fn default() -> Self {
        StageSpec {
            background: Rgb::new(1.0, 0.8, 0.8),
            key_light: DirectionalLightSpec {
                color_temperature_k: 6000.0,
                heading_deg: 40.0,
                pitch_deg: -20.0,
                roll_deg: 50.0,
                shadow_map_size: Some(512),
            },
            duck_model: DUCK_MODEL.to_string(),
            heart_sprite: SpriteSpec {
                texture: HEART_TEXTURE.to_string(),
                frame: CardFrame {
                    left: -0.05,
                    right: 0.05,
                    bottom: -0.05,
                    top: 0.05,
                },
            },
        }
    }
}
