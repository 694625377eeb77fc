//! Subcommand implementations.

use glam::DVec3;
use qsphere_config::CheckConfig;
use qsphere_cubesphere::{CubeFace, QuadSphereCoord, decode, encode, face_of};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::CliError;

/// Result of `qsph encode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodeReport {
    /// The normalized input direction.
    pub direction: [f64; 3],
    /// Face number, `0..=5`.
    pub face: u8,
    /// Face-local coordinates.
    pub x: f64,
    pub y: f64,
}

/// Result of `qsph decode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeReport {
    /// The (possibly clamped) coordinates that were decoded.
    pub coord: QuadSphereCoord,
    /// Unit direction.
    pub direction: [f64; 3],
}

/// Result of `qsph face`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceReport {
    pub face: u8,
    /// Outward normal of the face.
    pub normal: [f64; 3],
}

/// Result of `qsph check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub samples: u32,
    pub seed: u64,
    pub tolerance: f64,
    /// Worst distance between a direction and its round trip.
    pub max_error: f64,
    pub mean_error: f64,
    /// Samples per face, indexed by face number.
    pub face_counts: [u32; 6],
    pub passed: bool,
}

fn checked_direction(x: f64, y: f64, z: f64) -> Result<DVec3, CliError> {
    for c in [x, y, z] {
        if !c.is_finite() {
            return Err(CliError::NonFiniteInput(c));
        }
    }
    // Scale by the largest component so squaring neither overflows nor
    // underflows for extreme finite magnitudes.
    let dir = DVec3::new(x, y, z);
    let scale = dir.abs().max_element();
    if scale == 0.0 {
        return Err(CliError::ZeroDirection);
    }
    (dir / scale).try_normalize().ok_or(CliError::ZeroDirection)
}

/// Encode a direction; the input is normalized first.
///
/// Any finite, non-zero magnitude is accepted.
///
/// # Errors
///
/// Fails on zero-length or non-finite input.
pub fn run_encode(x: f64, y: f64, z: f64) -> Result<EncodeReport, CliError> {
    let dir = checked_direction(x, y, z)?;
    let qc = encode(dir);
    debug!(face = qc.face.index(), x = qc.x, y = qc.y, "Encoded direction");
    Ok(EncodeReport {
        direction: dir.to_array(),
        face: qc.face.index(),
        x: qc.x,
        y: qc.y,
    })
}

/// Decode a face number and face coordinates to a unit direction.
///
/// Coordinates outside `[-1, 1]` are clamped with a warning.
///
/// # Errors
///
/// Fails with [`CliError::CubeSphere`] for face numbers outside `0..=5` and
/// with [`CliError::NonFiniteInput`] for NaN or infinite coordinates.
pub fn run_decode(face: i64, x: f64, y: f64) -> Result<DecodeReport, CliError> {
    for c in [x, y] {
        if !c.is_finite() {
            return Err(CliError::NonFiniteInput(c));
        }
    }
    let face = CubeFace::try_from(face)?;
    let coord = QuadSphereCoord::new(face, x, y);
    if coord.x != x || coord.y != y {
        warn!(x, y, "Face coordinates outside [-1, 1] were clamped");
    }
    let direction = decode(coord.face, coord.x, coord.y);
    Ok(DecodeReport {
        coord,
        direction: direction.to_array(),
    })
}

/// Classify a direction onto its cube face.
///
/// # Errors
///
/// Fails on zero-length or non-finite input.
pub fn run_face(x: f64, y: f64, z: f64) -> Result<FaceReport, CliError> {
    let face = face_of(checked_direction(x, y, z)?);
    Ok(FaceReport {
        face: face.index(),
        normal: face.normal().to_array(),
    })
}

/// Uniformly distributed unit direction.
pub fn random_unit_direction<R: Rng>(rng: &mut R) -> DVec3 {
    let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let phi: f64 = rng.gen_range(-1.0_f64..1.0).acos();
    DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos()).normalize()
}

/// Round-trip random unit directions through encode/decode.
///
/// The report is returned even when the tolerance is exceeded; `passed`
/// records the verdict.
pub fn run_check(check: &CheckConfig) -> CheckReport {
    info!(
        samples = check.samples,
        seed = check.seed,
        "Starting encode/decode round-trip check"
    );

    let mut rng = Xoshiro256StarStar::seed_from_u64(check.seed);
    let mut max_error: f64 = 0.0;
    let mut total_error = 0.0;
    let mut face_counts = [0u32; 6];

    for _ in 0..check.samples {
        let dir = random_unit_direction(&mut rng);
        let qc = encode(dir);
        face_counts[usize::from(qc.face.index())] += 1;

        let err = (qc.to_direction() - dir).length();
        total_error += err;
        if err > max_error {
            max_error = err;
            debug!(?dir, ?qc, err, "New worst round trip");
        }
    }

    let mean_error = if check.samples == 0 {
        0.0
    } else {
        total_error / f64::from(check.samples)
    };
    let passed = max_error <= check.tolerance;

    info!(
        "Round trip: {} samples, max error {:.2e}, mean error {:.2e}",
        check.samples, max_error, mean_error
    );
    info!(
        "Face distribution: +Z={} +X={} -Y={} -X={} +Y={} -Z={}",
        face_counts[0],
        face_counts[1],
        face_counts[2],
        face_counts[3],
        face_counts[4],
        face_counts[5]
    );

    CheckReport {
        samples: check.samples,
        seed: check.seed,
        tolerance: check.tolerance,
        max_error,
        mean_error,
        face_counts,
        passed,
    }
}
