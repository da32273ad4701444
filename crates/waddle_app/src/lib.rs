//! Waddle Application
//!
//! The duck, minus the renderer. This crate owns everything the host engine
//! does not: the duck body driven by a damped spring, reactions to pokes and
//! kisses, the declarative stage description, configuration, and a
//! deterministic headless runtime for exercising all of it without a window.
//!
//! A host adapter runs the real loop: feed key events in via
//! [`DuckApp::key_pressed`], call [`DuckApp::advance`] once per frame with
//! the elapsed time and the viewer position, then apply the returned
//! [`FrameOutput`] to its scene graph and draw the live effects.

pub mod config;
pub mod duck;
pub mod error;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod stage;

pub use config::WaddleConfig;
pub use duck::{DuckApp, FrameOutput};
pub use error::{AppError, Result};
pub use headless_report::{ReportStatus, RunReport};
pub use headless_runner::{run_scenario, RunOutcome};
pub use headless_runtime::{FrameTick, HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use stage::StageSpec;
