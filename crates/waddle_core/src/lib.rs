//! Waddle Core Primitives
//!
//! Foundational types shared by the Waddle crates:
//!
//! - **Geometry**: the `f64` 3D vector every simulation value is made of
//! - **Input**: key codes, duck actions, bindings, and the per-frame
//!   event queue drained by the simulation loop
//!
//! Nothing in this crate talks to a rendering engine. Host adapters map
//! their own key events into [`Key`] and read simulation output back out.

pub mod input;
pub mod vec;

pub use input::{DuckAction, EventQueue, InputBindings, Key, PokeStrength};
pub use vec::Vec3;
