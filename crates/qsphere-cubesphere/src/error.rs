//! Error types for the fallible face-index conversions.

/// Errors raised by the integer-indexed entry points of the quad-sphere API.
///
/// The floating-point transforms themselves never fail; only conversions
/// from raw face numbers can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CubeSphereError {
    /// The face number is outside `0..=5`.
    #[error("invalid cube face index {0}, expected 0..=5")]
    InvalidFaceIndex(i64),
}
