//! Closed-form damped harmonic oscillator.
//!
//! One finite time step of a damped spring is a 2×2 linear map from
//! (offset-from-equilibrium, velocity) to the same pair at `t + dt`. The map
//! is solved analytically per regime, so repeated stepping never accumulates
//! integration error the way Euler or RK variants do. The same scalar
//! coefficients apply to each axis independently.

use thiserror::Error;
use waddle_core::Vec3;

/// Tolerance for regime classification and the too-low-frequency check.
const EPSILON: f64 = 1e-4;

/// Rejected tuning parameters. Recoverable: the caller picked a bad
/// configuration, nothing about the simulation state is suspect.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OscillatorError {
    #[error("angular frequency must be non-negative, got {0}")]
    InvalidFrequency(f64),
    #[error("damping ratio must be non-negative, got {0}")]
    InvalidDampingRatio(f64),
}

/// The 2×2 transition coefficients for one time step.
///
/// `new_offset = offset * pos_pos + velocity * pos_vel`
/// `new_velocity = offset * vel_pos + velocity * vel_vel`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub pos_pos: f64,
    pub pos_vel: f64,
    pub vel_pos: f64,
    pub vel_vel: f64,
}

impl Transition {
    /// Leaves position and velocity untouched.
    pub const IDENTITY: Transition = Transition {
        pos_pos: 1.0,
        pos_vel: 0.0,
        vel_pos: 0.0,
        vel_vel: 1.0,
    };

    /// Solve the transition for one step of `dt` seconds.
    ///
    /// Branches on the damping regime: overdamped (two real roots),
    /// underdamped (complex conjugate roots), critically damped (repeated
    /// root), classified with a fixed 1e-4 tolerance around a ratio of 1.
    ///
    /// An angular frequency below the same 1e-4 threshold cannot produce
    /// visible motion within a frame; the transition degrades to the identity
    /// and a warning is logged so mis-tuned callers can notice.
    pub fn solve(dt: f64, angular_freq: f64, damping_ratio: f64) -> Result<Self, OscillatorError> {
        if angular_freq < 0.0 {
            return Err(OscillatorError::InvalidFrequency(angular_freq));
        }
        if damping_ratio < 0.0 {
            return Err(OscillatorError::InvalidDampingRatio(damping_ratio));
        }

        if angular_freq < EPSILON {
            tracing::warn!(angular_freq, "angular frequency too low to change motion");
            return Ok(Self::IDENTITY);
        }

        if damping_ratio > 1.0 + EPSILON {
            // Overdamped: roots z1 = za - zb, z2 = za + zb, both negative.
            let za = -angular_freq * damping_ratio;
            let zb = angular_freq * (damping_ratio * damping_ratio - 1.0).sqrt();
            let z1 = za - zb;
            let z2 = za + zb;

            let e1 = (z1 * dt).exp();
            let e2 = (z2 * dt).exp();

            let inv_two_zb = 1.0 / (2.0 * zb);

            let e1_over_two_zb = e1 * inv_two_zb;
            let e2_over_two_zb = e2 * inv_two_zb;

            let z1e1_over_two_zb = z1 * e1_over_two_zb;
            let z2e2_over_two_zb = z2 * e2_over_two_zb;

            Ok(Transition {
                pos_pos: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
                pos_vel: -e1_over_two_zb + e2_over_two_zb,
                vel_pos: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
                vel_vel: -z1e1_over_two_zb + z2e2_over_two_zb,
            })
        } else if damping_ratio < 1.0 - EPSILON {
            // Underdamped: complex conjugate roots -omega_zeta ± i*alpha.
            let omega_zeta = angular_freq * damping_ratio;
            let alpha = angular_freq * (1.0 - damping_ratio * damping_ratio).sqrt();

            let exp_term = (-omega_zeta * dt).exp();
            let cos_term = (alpha * dt).cos();
            let sin_term = (alpha * dt).sin();

            let inv_alpha = 1.0 / alpha;

            let exp_sin = exp_term * sin_term;
            let exp_cos = exp_term * cos_term;
            let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;

            Ok(Transition {
                pos_pos: exp_cos + exp_omega_zeta_sin_over_alpha,
                pos_vel: exp_sin * inv_alpha,
                vel_pos: -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha,
                vel_vel: exp_cos - exp_omega_zeta_sin_over_alpha,
            })
        } else {
            // Critically damped: repeated root at -angular_freq.
            let exp_term = (-angular_freq * dt).exp();
            let time_exp = dt * exp_term;
            let time_exp_freq = time_exp * angular_freq;

            Ok(Transition {
                pos_pos: time_exp_freq + exp_term,
                pos_vel: time_exp,
                vel_pos: -angular_freq * time_exp_freq,
                vel_vel: -time_exp_freq + exp_term,
            })
        }
    }

    /// Apply the map to a pre-update (offset, velocity) pair.
    ///
    /// Both outputs are computed from the inputs as given; the new velocity
    /// must never see the already-updated offset.
    pub fn apply(&self, offset: Vec3, velocity: Vec3) -> (Vec3, Vec3) {
        let new_offset = offset * self.pos_pos + velocity * self.pos_vel;
        let new_velocity = offset * self.vel_pos + velocity * self.vel_vel;
        (new_offset, new_velocity)
    }
}

/// Advance a damped spring by `dt` seconds.
///
/// Subtracts `equilibrium` to get the offset, applies the per-regime
/// transition to (offset, velocity), and re-adds `equilibrium`. Pure and
/// deterministic; NaN and infinity inputs propagate per IEEE rules.
///
/// # Errors
///
/// [`OscillatorError`] when `angular_freq` or `damping_ratio` is negative.
pub fn step(
    position: Vec3,
    velocity: Vec3,
    equilibrium: Vec3,
    dt: f64,
    angular_freq: f64,
    damping_ratio: f64,
) -> Result<(Vec3, Vec3), OscillatorError> {
    let transition = Transition::solve(dt, angular_freq, damping_ratio)?;
    let (new_offset, new_velocity) = transition.apply(position - equilibrium, velocity);
    Ok((new_offset + equilibrium, new_velocity))
}
