//! Report output model for headless diagnostics runs.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use waddle_core::Vec3;

/// Report status for a headless diagnostics run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless diagnostics run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub final_position: Vec3,
}

impl RunReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64, final_position: Vec3) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            final_position,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
        final_position: Vec3,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            final_position,
        }
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = RunReport::failed(
            "assert_settled",
            2,
            "still moving".to_string(),
            120,
            1920,
            Vec3::new(0.0, 24.9, -7.1),
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn passed_report_has_no_failure_fields() {
        let report = RunReport::passed(60, 960, Vec3::ZERO);
        assert_eq!(report.status, ReportStatus::Passed);
        assert!(report.failed_step_index.is_none());
        assert!(report.assertion.is_none());
        assert!(report.message.is_none());
    }

    #[test]
    fn writer_output_ends_with_newline() {
        let report = RunReport::passed(1, 16, Vec3::ZERO);
        let mut buf = Vec::new();
        report.write_to_writer(&mut buf).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));
    }
}
