//! Input events and key bindings.
//!
//! Host adapters translate their native key events into [`Key`] values and
//! push the bound [`DuckAction`] onto the [`EventQueue`]. The simulation
//! drains the queue once per frame, so "what happened" is decoupled from
//! "when the frame reacts to it".

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

/// Virtual key code (platform-agnostic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key(pub u32);

impl Key {
    pub const SPACE: Key = Key(0x20);
    pub const ENTER: Key = Key(0x0D);
    pub const B: Key = Key(0x42);
    pub const X: Key = Key(0x58);
}

/// How hard the duck gets poked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PokeStrength {
    /// "boop"
    Light,
    /// "bonk"
    Medium,
    /// "boffff"
    Heavy,
}

/// A discrete thing the user did to the duck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuckAction {
    Poke(PokeStrength),
    Kiss,
}

/// Key → action table consulted by host input callbacks.
pub struct InputBindings {
    map: FxHashMap<Key, DuckAction>,
}

impl InputBindings {
    /// Empty binding table.
    pub fn empty() -> Self {
        Self { map: FxHashMap::default() }
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: Key, action: DuckAction) {
        self.map.insert(key, action);
    }

    /// Remove a binding. Returns the action that was bound, if any.
    pub fn unbind(&mut self, key: Key) -> Option<DuckAction> {
        self.map.remove(&key)
    }

    /// Look up the action bound to a key.
    pub fn action_for(&self, key: Key) -> Option<DuckAction> {
        self.map.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for InputBindings {
    /// The classic layout: space boops, b bonks, enter really bonks, x is a kiss.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::SPACE, DuckAction::Poke(PokeStrength::Light));
        bindings.bind(Key::B, DuckAction::Poke(PokeStrength::Medium));
        bindings.bind(Key::ENTER, DuckAction::Poke(PokeStrength::Heavy));
        bindings.bind(Key::X, DuckAction::Kiss);
        bindings
    }
}

/// FIFO queue of actions awaiting the next frame.
///
/// Single-threaded by design: input callbacks and the frame loop run on the
/// same logical thread, so this is a plain `VecDeque` with no locking.
#[derive(Default)]
pub struct EventQueue {
    pending: VecDeque<DuckAction>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an action for the next frame.
    pub fn push(&mut self, action: DuckAction) {
        tracing::trace!(?action, "queued input action");
        self.pending.push_back(action);
    }

    /// Translate a key press through the bindings and enqueue the result.
    /// Unbound keys are ignored.
    pub fn push_key(&mut self, bindings: &InputBindings, key: Key) {
        if let Some(action) = bindings.action_for(key) {
            self.push(action);
        }
    }

    /// Pop the oldest pending action.
    pub fn pop(&mut self) -> Option<DuckAction> {
        self.pending.pop_front()
    }

    /// Drain every pending action in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = DuckAction> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
