//! The duck body simulation.
//!
//! All per-tick state lives here by value; there is no scene-graph object in
//! sight. A host adapter feeds key events in, calls [`DuckApp::advance`]
//! once per frame with the elapsed time and the viewer position, and applies
//! the returned [`FrameOutput`] to its scene.

use rand::rngs::StdRng;
use rand::SeedableRng;

use waddle_animation::{Effect, EffectStage, Spring3, SpringTuning};
use waddle_core::{DuckAction, EventQueue, InputBindings, Key, PokeStrength, Vec3};

use crate::error::Result;
use crate::stage::HEART_TEXTURE;

/// Where the duck hatches, far upstage so it swoops in on launch.
pub const HATCH_POSITION: Vec3 = Vec3::new(0.0, 500.0, -2.0);

/// Initial drift, so the swoop starts with some life in it.
pub const HATCH_VELOCITY: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// Where the spring pulls the duck.
pub const REST_POSE: Vec3 = Vec3::new(0.0, 25.0, -7.0);

/// The camera aims this far above the duck's origin, roughly its head.
pub const CAMERA_AIM_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 2.75);

/// Degrees of spin added to the duck's heading each frame.
pub const SPIN_PER_FRAME_DEG: f64 = 1.0;

/// Per-axis impulse scale for a light poke. The vertical kick is softer so
/// boops read as a wobble rather than a launch.
const BOOP_SCALE: Vec3 = Vec3::new(15.0, 15.0, 12.0);
const BONK_SCALE: f64 = 25.0;
const BOFF_SCALE: f64 = 50.0;

/// What the host applies to its scene after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub duck_position: Vec3,
    pub duck_heading_deg: f64,
    pub camera_look_at: Vec3,
}

/// The whole toy: duck spring, spin, input queue, and live effects.
pub struct DuckApp {
    spring: Spring3,
    heading_deg: f64,
    bindings: InputBindings,
    queue: EventQueue,
    effects: EffectStage,
    rng: StdRng,
}

impl DuckApp {
    /// A freshly hatched duck with the default key bindings.
    ///
    /// `seed` drives popup placement jitter only; motion is deterministic
    /// regardless.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, SpringTuning::DUCK_BOB)
    }

    /// Same, with a custom spring tuning.
    pub fn with_tuning(seed: u64, tuning: SpringTuning) -> Self {
        let mut spring = Spring3::new(HATCH_POSITION, REST_POSE, tuning);
        spring.set_velocity(HATCH_VELOCITY);
        DuckApp {
            spring,
            heading_deg: 0.0,
            bindings: InputBindings::default(),
            queue: EventQueue::new(),
            effects: EffectStage::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Host input callback: translate a key press through the bindings and
    /// queue the result for the next frame. Unbound keys are ignored.
    pub fn key_pressed(&mut self, key: Key) {
        self.queue.push_key(&self.bindings, key);
    }

    /// Queue an action directly, bypassing the bindings.
    pub fn enqueue(&mut self, action: DuckAction) {
        self.queue.push(action);
    }

    /// One frame: react to queued input, spin, spring, age effects.
    ///
    /// `viewer` is the camera position; impulses push the duck away from it.
    /// Fails only when the spring tuning is invalid, in which case nothing
    /// advanced.
    pub fn advance(&mut self, dt: f64, viewer: Vec3) -> Result<FrameOutput> {
        self.spring.tuning().validate()?;

        while let Some(action) = self.queue.pop() {
            self.apply_action(action, viewer);
        }

        self.heading_deg = (self.heading_deg + SPIN_PER_FRAME_DEG) % 360.0;
        self.spring.step(dt)?;
        self.effects.tick(dt);

        let duck_position = self.spring.position();
        Ok(FrameOutput {
            duck_position,
            duck_heading_deg: self.heading_deg,
            camera_look_at: duck_position + CAMERA_AIM_OFFSET,
        })
    }

    fn apply_action(&mut self, action: DuckAction, viewer: Vec3) {
        let direction = self.spring.position() - viewer;
        match action {
            DuckAction::Poke(PokeStrength::Light) => {
                self.effects.spawn(Effect::text("boop", 1.0), &mut self.rng);
                self.spring.nudge(direction.component_mul(BOOP_SCALE));
            }
            DuckAction::Poke(PokeStrength::Medium) => {
                self.effects.spawn(Effect::text("bonk", 2.0), &mut self.rng);
                self.spring.nudge(direction * BONK_SCALE);
            }
            DuckAction::Poke(PokeStrength::Heavy) => {
                self.effects.spawn(Effect::text("boffff", 3.0), &mut self.rng);
                self.spring.nudge(direction * BOFF_SCALE);
            }
            DuckAction::Kiss => {
                tracing::debug!("luv u");
                self.effects.spawn(Effect::sprite(HEART_TEXTURE, 2.0), &mut self.rng);
                // A kiss barely pushes sideways, lofts with the square of the
                // distance, and always dips the duck.
                self.spring.nudge(Vec3::new(
                    0.2 * direction.x,
                    0.01 * direction.y * direction.y,
                    -(direction.z * direction.z),
                ));
            }
        }
    }

    pub fn position(&self) -> Vec3 {
        self.spring.position()
    }

    pub fn velocity(&self) -> Vec3 {
        self.spring.velocity()
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    pub fn effects(&self) -> &EffectStage {
        &self.effects
    }

    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    /// Within `eps` of the rest pose and essentially motionless.
    pub fn is_settled(&self, eps: f64) -> bool {
        self.spring.is_settled(eps, eps)
    }

    /// Number of input actions waiting for the next frame.
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 60.0;
    const VIEWER: Vec3 = Vec3::ZERO;

    /// A zero-dt frame applies queued impulses without moving the duck,
    /// which makes the impulse arithmetic exactly observable.
    fn advance_instant(app: &mut DuckApp) -> FrameOutput {
        app.advance(0.0, VIEWER).unwrap()
    }

    #[test]
    fn boop_scales_each_axis_separately() {
        let mut app = DuckApp::new(1);
        app.key_pressed(Key::SPACE);
        advance_instant(&mut app);

        let direction = HATCH_POSITION - VIEWER;
        let expected = HATCH_VELOCITY + direction.component_mul(BOOP_SCALE);
        assert_eq!(app.velocity(), expected);
        assert_eq!(app.effects().len(), 1);
    }

    #[test]
    fn bonk_and_boff_scale_uniformly() {
        let mut bonked = DuckApp::new(1);
        bonked.key_pressed(Key::B);
        advance_instant(&mut bonked);
        let direction = HATCH_POSITION - VIEWER;
        assert_eq!(bonked.velocity(), HATCH_VELOCITY + direction * 25.0);

        let mut boffed = DuckApp::new(1);
        boffed.key_pressed(Key::ENTER);
        advance_instant(&mut boffed);
        assert_eq!(boffed.velocity(), HATCH_VELOCITY + direction * 50.0);
    }

    #[test]
    fn kiss_uses_the_quadratic_lofts() {
        let mut app = DuckApp::new(1);
        app.key_pressed(Key::X);
        advance_instant(&mut app);

        let d = HATCH_POSITION - VIEWER;
        let expected = HATCH_VELOCITY
            + Vec3::new(0.2 * d.x, 0.01 * d.y * d.y, -(d.z * d.z));
        assert_eq!(app.velocity(), expected);

        // Kisses spawn a heart, not text.
        let (_, effect) = app.effects().iter().next().unwrap();
        assert!(matches!(
            &effect.kind,
            waddle_animation::EffectKind::Sprite { texture } if texture == "heart.png"
        ));
    }

    #[test]
    fn impulses_push_away_from_the_viewer() {
        // Viewer in front of the duck: a poke must increase the separation
        // velocity along the viewer-to-duck line.
        let viewer = Vec3::new(0.0, 400.0, -2.0);
        let mut app = DuckApp::new(1);
        app.key_pressed(Key::B);
        app.advance(0.0, viewer).unwrap();

        let direction = HATCH_POSITION - viewer;
        let away = app.velocity().dot(direction);
        let before = HATCH_VELOCITY.dot(direction);
        assert!(away > before);
    }

    #[test]
    fn unbound_key_does_nothing() {
        let mut app = DuckApp::new(1);
        app.key_pressed(Key(0x51));
        advance_instant(&mut app);
        assert_eq!(app.velocity(), HATCH_VELOCITY);
        assert!(app.effects().is_empty());
    }

    #[test]
    fn queue_is_drained_each_frame() {
        let mut app = DuckApp::new(1);
        app.key_pressed(Key::SPACE);
        app.key_pressed(Key::SPACE);
        assert_eq!(app.pending_actions(), 2);
        advance_instant(&mut app);
        assert_eq!(app.pending_actions(), 0);
        assert_eq!(app.effects().len(), 2);
    }

    #[test]
    fn heading_spins_and_wraps() {
        let mut app = DuckApp::new(1);
        for _ in 0..359 {
            app.advance(DT, VIEWER).unwrap();
        }
        assert_relative_eq!(app.heading_deg(), 359.0, max_relative = 1e-9);
        app.advance(DT, VIEWER).unwrap();
        assert_relative_eq!(app.heading_deg(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn camera_look_at_tracks_the_head() {
        let mut app = DuckApp::new(1);
        let out = app.advance(DT, VIEWER).unwrap();
        assert_eq!(out.camera_look_at, out.duck_position + CAMERA_AIM_OFFSET);
    }

    #[test]
    fn duck_swoops_in_and_settles_at_the_rest_pose() {
        let mut app = DuckApp::new(1);
        for _ in 0..600 {
            let out = app.advance(DT, VIEWER).unwrap();
            assert!(out.duck_position.is_finite());
        }
        assert!(app.is_settled(1e-2));
        assert!((app.position().y - REST_POSE.y).abs() < 1e-2);
    }

    #[test]
    fn invalid_tuning_surfaces_as_an_error() {
        let tuning = SpringTuning {
            angular_freq: -20.0,
            damping_ratio: 0.35,
        };
        let mut app = DuckApp::with_tuning(1, tuning);
        assert!(app.advance(DT, VIEWER).is_err());
    }

    #[test]
    fn motion_is_independent_of_the_effect_seed() {
        let mut a = DuckApp::new(1);
        let mut b = DuckApp::new(999);
        for _ in 0..120 {
            a.key_pressed(Key::SPACE);
            b.key_pressed(Key::SPACE);
            let oa = a.advance(DT, VIEWER).unwrap();
            let ob = b.advance(DT, VIEWER).unwrap();
            assert_eq!(oa, ob);
        }
    }
}
