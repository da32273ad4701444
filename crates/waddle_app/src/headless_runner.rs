//! Scenario runner that executes headless diagnostics against the duck.

use anyhow::{bail, Result};

use crate::duck::DuckApp;
use crate::headless_report::RunReport;
use crate::headless_runtime::{HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{parse_key, HeadlessScenario, ScenarioStep};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: RunReport },
    Failed { report: RunReport },
}

impl RunOutcome {
    pub fn report(&self) -> &RunReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a fresh duck.
pub fn run_scenario(input: &str, cfg: HeadlessRunConfig) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, cfg)
}

/// Execute a pre-loaded scenario against a fresh duck.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, cfg: HeadlessRunConfig) -> Result<RunOutcome> {
    let mut app = DuckApp::new(cfg.seed);
    let mut elapsed_frames: u64 = 0;
    let mut elapsed_ms: u64 = 0;

    for (step_index, step) in scenario.steps.iter().enumerate() {
        match step {
            ScenarioStep::Tick { frames } => {
                run_frames(&mut app, cfg, *frames, &mut elapsed_frames, &mut elapsed_ms)?;
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, cfg.tick_ms);
                run_frames(&mut app, cfg, frames, &mut elapsed_frames, &mut elapsed_ms)?;
            }
            ScenarioStep::Press { key } => {
                let Some(code) = parse_key(key) else {
                    bail!("step {step_index}: unknown key '{key}'");
                };
                app.key_pressed(code);
            }
            ScenarioStep::AssertSettled { within } => {
                if !app.is_settled(*within) {
                    let message = format!(
                        "duck not settled within {within}: at {:?}, velocity {:?}",
                        app.position(),
                        app.velocity()
                    );
                    return Ok(failed(
                        "assert_settled", step_index, message, elapsed_frames, elapsed_ms, &app,
                    ));
                }
            }
            ScenarioStep::AssertAltitudeAbove { z } => {
                if app.position().z <= *z {
                    let message =
                        format!("duck altitude {} is not above {z}", app.position().z);
                    return Ok(failed(
                        "assert_altitude_above", step_index, message, elapsed_frames, elapsed_ms, &app,
                    ));
                }
            }
            ScenarioStep::AssertEffectCount { expected } => {
                let live = app.effects().len();
                if live != *expected {
                    let message = format!("expected {expected} live effects, found {live}");
                    return Ok(failed(
                        "assert_effect_count", step_index, message, elapsed_frames, elapsed_ms, &app,
                    ));
                }
            }
        }
    }

    Ok(RunOutcome::Passed {
        report: RunReport::passed(elapsed_frames, elapsed_ms, app.position()),
    })
}

fn failed(
    assertion: &str,
    step_index: usize,
    message: String,
    elapsed_frames: u64,
    elapsed_ms: u64,
    app: &DuckApp,
) -> RunOutcome {
    RunOutcome::Failed {
        report: RunReport::failed(
            assertion,
            step_index,
            message,
            elapsed_frames,
            elapsed_ms,
            app.position(),
        ),
    }
}

fn run_frames(
    app: &mut DuckApp,
    cfg: HeadlessRunConfig,
    frames: u64,
    elapsed_frames: &mut u64,
    elapsed_ms: &mut u64,
) -> Result<()> {
    HeadlessRuntime::run(cfg, frames, |tick| {
        app.advance(tick.dt, cfg.viewer)?;
        Ok(())
    })?;
    *elapsed_frames = elapsed_frames.saturating_add(frames);
    *elapsed_ms = elapsed_ms.saturating_add(cfg.tick_ms.saturating_mul(frames));
    Ok(())
}

fn wait_frames(wait_ms: u64, tick_ms: u64) -> u64 {
    if wait_ms == 0 {
        return 0;
    }
    let tick = tick_ms.max(1);
    wait_ms.saturating_add(tick.saturating_sub(1)) / tick
}
