//! Stateful spring wrapper around the closed-form oscillator.

use waddle_core::Vec3;

use crate::oscillator::{step, OscillatorError};

/// Spring tuning: natural angular frequency (rad/s) and damping ratio.
///
/// Both must be non-negative. A ratio below 1 oscillates while settling,
/// exactly 1 is the fastest non-oscillatory return, above 1 creeps back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTuning {
    pub angular_freq: f64,
    pub damping_ratio: f64,
}

impl SpringTuning {
    /// The duck's bob: snappy, visibly springy, settles in well under a second.
    pub const DUCK_BOB: SpringTuning = SpringTuning {
        angular_freq: 20.0,
        damping_ratio: 0.35,
    };

    /// Validated constructor.
    pub fn new(angular_freq: f64, damping_ratio: f64) -> Result<Self, OscillatorError> {
        let tuning = SpringTuning { angular_freq, damping_ratio };
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), OscillatorError> {
        if self.angular_freq < 0.0 {
            return Err(OscillatorError::InvalidFrequency(self.angular_freq));
        }
        if self.damping_ratio < 0.0 {
            return Err(OscillatorError::InvalidDampingRatio(self.damping_ratio));
        }
        Ok(())
    }
}

/// A 3D spring: current position and velocity driven toward a target.
///
/// State lives here by value; no scene-graph node or engine handle is
/// involved. The owner steps it once per frame and copies the position out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring3 {
    position: Vec3,
    velocity: Vec3,
    target: Vec3,
    tuning: SpringTuning,
}

impl Spring3 {
    /// Spring at `initial`, at rest, driven toward `target`.
    pub fn new(initial: Vec3, target: Vec3, tuning: SpringTuning) -> Self {
        Spring3 {
            position: initial,
            velocity: Vec3::ZERO,
            target,
            tuning,
        }
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) -> Result<(), OscillatorError> {
        let (position, velocity) = step(
            self.position,
            self.velocity,
            self.target,
            dt,
            self.tuning.angular_freq,
            self.tuning.damping_ratio,
        )?;
        self.position = position;
        self.velocity = velocity;
        Ok(())
    }

    /// Add an impulse to the velocity. The next step reacts to it.
    pub fn nudge(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn tuning(&self) -> SpringTuning {
        self.tuning
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Within `eps_pos` of the target and moving slower than `eps_vel`.
    pub fn is_settled(&self, eps_pos: f64, eps_vel: f64) -> bool {
        (self.position - self.target).length_sq() < eps_pos * eps_pos
            && self.velocity.length_sq() < eps_vel * eps_vel
    }

    /// Jump to the target and stop.
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = Vec3::ZERO;
    }
}
