//! Errors surfaced by the `qsph` tool.

use qsphere_config::ConfigError;
use qsphere_cubesphere::CubeSphereError;

/// Everything that can make a `qsph` invocation fail.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Loading or saving the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A face number was out of range.
    #[error(transparent)]
    CubeSphere(#[from] CubeSphereError),

    /// A direction with zero length has no face.
    #[error("direction must be non-zero")]
    ZeroDirection,

    /// An input component was NaN or infinite.
    #[error("input must be finite, got {0}")]
    NonFiniteInput(f64),

    /// Encoding a report as JSON failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Creating the log directory failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sampled round trip exceeded the configured tolerance.
    #[error("round-trip error {max_error:e} exceeds tolerance {tolerance:e}")]
    CheckFailed {
        /// Worst observed distance between a direction and its round trip.
        max_error: f64,
        /// Configured limit.
        tolerance: f64,
    },
}
