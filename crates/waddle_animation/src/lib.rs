//! Waddle Animation System
//!
//! Spring physics and transient effect sequencing for the duck.
//!
//! # Features
//!
//! - **Closed-form springs**: damped harmonic motion solved analytically per
//!   frame, so settling behavior never accumulates integration error
//! - **Tuning presets**: the bob the duck ships with
//! - **Transient effects**: popup text and sprites with a fixed
//!   hold-then-fade lifecycle and automatic removal

pub mod effects;
pub mod oscillator;
pub mod spring;

pub use effects::{Effect, EffectId, EffectKind, EffectStage};
pub use oscillator::{step, OscillatorError, Transition};
pub use spring::{Spring3, SpringTuning};
