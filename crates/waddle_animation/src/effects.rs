//! Transient popup effects.
//!
//! Popup text and sprites share one lifecycle: appear somewhere near the
//! middle of the screen, hold at full opacity, fade out over one second,
//! then disappear on their own. The host renders whatever the stage holds
//! each frame; nothing here outlives its timer.

use rand::Rng;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a live effect.
    pub struct EffectId;
}

/// Seconds every effect takes to fade once its hold expires.
pub const FADE_SECONDS: f64 = 1.0;

/// What gets drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    /// Screen-space popup text ("boop", "bonk", ...).
    Text { content: String },
    /// Screen-space textured card (the kiss heart).
    Sprite { texture: String },
}

/// One transient visual element.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    /// Screen-space anchor, set at spawn time.
    pub anchor: (f64, f64),
    age: f64,
    hold: f64,
    fade: f64,
}

impl Effect {
    /// Popup text held at full opacity for `hold` seconds.
    pub fn text(content: impl Into<String>, hold: f64) -> Self {
        Effect {
            kind: EffectKind::Text { content: content.into() },
            anchor: (0.0, 0.0),
            age: 0.0,
            hold,
            fade: FADE_SECONDS,
        }
    }

    /// Textured sprite held at full opacity for `hold` seconds.
    pub fn sprite(texture: impl Into<String>, hold: f64) -> Self {
        Effect {
            kind: EffectKind::Sprite { texture: texture.into() },
            anchor: (0.0, 0.0),
            age: 0.0,
            hold,
            fade: FADE_SECONDS,
        }
    }

    /// Current opacity: 1 during the hold, ramping linearly to 0 during the
    /// fade.
    pub fn alpha(&self) -> f64 {
        if self.age <= self.hold {
            1.0
        } else {
            let fade_progress = (self.age - self.hold) / self.fade;
            (1.0 - fade_progress).max(0.0)
        }
    }

    /// Past the end of its fade.
    pub fn is_expired(&self) -> bool {
        self.age >= self.hold + self.fade
    }

    pub fn age(&self) -> f64 {
        self.age
    }
}

/// All live transient effects, keyed storage with tick-and-sweep removal.
#[derive(Default)]
pub struct EffectStage {
    effects: SlotMap<EffectId, Effect>,
}

impl EffectStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an effect, jittering its anchor so repeated pokes scatter instead
    /// of stacking. Text lands slightly right of center, matching where the
    /// duck tends to sit on screen.
    pub fn spawn(&mut self, mut effect: Effect, rng: &mut impl Rng) -> EffectId {
        effect.anchor = match effect.kind {
            EffectKind::Text { .. } => (rng.gen_range(-0.4..0.6), rng.gen_range(-0.5..0.5)),
            EffectKind::Sprite { .. } => (rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)),
        };
        tracing::debug!(kind = ?effect.kind, anchor = ?effect.anchor, "spawned effect");
        self.effects.insert(effect)
    }

    /// Age every effect and remove the ones whose fade has finished.
    pub fn tick(&mut self, dt: f64) {
        let mut expired: SmallVec<[EffectId; 8]> = SmallVec::new();
        for (id, effect) in self.effects.iter_mut() {
            effect.age += dt;
            if effect.is_expired() {
                expired.push(id);
            }
        }
        for id in expired {
            self.effects.remove(id);
        }
    }

    pub fn get(&self, id: EffectId) -> Option<&Effect> {
        self.effects.get(id)
    }

    /// Live effects with their current alpha, for the renderer.
    pub fn iter(&self) -> impl Iterator<Item = (EffectId, &Effect)> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn effect_holds_then_fades_then_expires() {
        let mut stage = EffectStage::new();
        let id = stage.spawn(Effect::text("boop", 1.0), &mut rng());

        stage.tick(0.5);
        assert_eq!(stage.get(id).unwrap().alpha(), 1.0);

        // Halfway through the fade.
        stage.tick(1.0);
        let alpha = stage.get(id).unwrap().alpha();
        assert!((alpha - 0.5).abs() < 1e-9, "expected half-faded, got {alpha}");

        // Past the end of the fade the effect is gone.
        stage.tick(0.6);
        assert!(stage.get(id).is_none());
        assert!(stage.is_empty());
    }

    #[test]
    fn sprite_lifecycle_matches_hold_plus_fade() {
        let mut stage = EffectStage::new();
        stage.spawn(Effect::sprite("heart.png", 2.0), &mut rng());

        stage.tick(2.9);
        assert_eq!(stage.len(), 1);
        stage.tick(0.2);
        assert!(stage.is_empty());
    }

    #[test]
    fn spawn_jitters_anchor_within_bounds() {
        let mut stage = EffectStage::new();
        let mut rng = rng();
        for _ in 0..100 {
            let id = stage.spawn(Effect::text("bonk", 2.0), &mut rng);
            let (x, y) = stage.get(id).unwrap().anchor;
            assert!((-0.4..0.6).contains(&x), "text x out of range: {x}");
            assert!((-0.5..0.5).contains(&y), "text y out of range: {y}");
        }
        for _ in 0..100 {
            let id = stage.spawn(Effect::sprite("heart.png", 2.0), &mut rng);
            let (x, y) = stage.get(id).unwrap().anchor;
            assert!((-0.5..0.5).contains(&x), "sprite x out of range: {x}");
            assert!((-0.5..0.5).contains(&y), "sprite y out of range: {y}");
        }
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let mut a = EffectStage::new();
        let mut b = EffectStage::new();
        let id_a = a.spawn(Effect::text("boffff", 3.0), &mut rng());
        let id_b = b.spawn(Effect::text("boffff", 3.0), &mut rng());
        assert_eq!(a.get(id_a).unwrap().anchor, b.get(id_b).unwrap().anchor);
    }

    #[test]
    fn overlapping_effects_age_independently() {
        let mut stage = EffectStage::new();
        let mut rng = rng();
        let short = stage.spawn(Effect::text("boop", 1.0), &mut rng);
        stage.tick(1.5);
        let long = stage.spawn(Effect::text("boffff", 3.0), &mut rng);

        // Short one is mid-fade, long one untouched.
        assert!(stage.get(short).unwrap().alpha() < 1.0);
        assert_eq!(stage.get(long).unwrap().alpha(), 1.0);

        stage.tick(0.6);
        assert!(stage.get(short).is_none());
        assert_eq!(stage.len(), 1);
    }
}
