//! Rendering command reports as plain text or JSON.

use qsphere_config::{OutputConfig, OutputFormat};
use serde::Serialize;

use crate::CliError;
use crate::commands::{CheckReport, DecodeReport, EncodeReport, FaceReport};

/// A report with a one-line plain-text form.
pub trait PlainText {
    /// Whitespace-separated values with `precision` fractional digits.
    fn plain(&self, precision: usize) -> String;
}

impl PlainText for EncodeReport {
    fn plain(&self, precision: usize) -> String {
        format!("{} {:.p$} {:.p$}", self.face, self.x, self.y, p = precision)
    }
}

impl PlainText for DecodeReport {
    fn plain(&self, precision: usize) -> String {
        let [x, y, z] = self.direction;
        format!("{x:.p$} {y:.p$} {z:.p$}", p = precision)
    }
}

impl PlainText for FaceReport {
    fn plain(&self, _precision: usize) -> String {
        let [x, y, z] = self.normal;
        format!("{} {x} {y} {z}", self.face)
    }
}

impl PlainText for CheckReport {
    fn plain(&self, _precision: usize) -> String {
        let verdict = if self.passed { "ok" } else { "FAILED" };
        let counts = self.face_counts.map(|n| n.to_string()).join(" ");
        format!(
            "{verdict} samples={} seed={} max_error={:.3e} mean_error={:.3e} tolerance={:.1e} faces=[{counts}]",
            self.samples, self.seed, self.max_error, self.mean_error, self.tolerance
        )
    }
}

/// Render a report in the configured format.
///
/// # Errors
///
/// Returns [`CliError::Json`] if JSON serialization fails.
pub fn render<T: PlainText + Serialize>(
    report: &T,
    output: &OutputConfig,
) -> Result<String, CliError> {
    match output.format {
        OutputFormat::Plain => Ok(report.plain(output.precision)),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}
