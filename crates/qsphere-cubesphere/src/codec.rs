//! Quad-sphere encode/decode: unit directions to `(face, x, y)` and back.
//!
//! Encoding classifies the face, rotates the direction into the `+Z` frame
//! and inverts the warp there. Decoding runs the same steps backwards. The
//! resulting coordinates compose directly with grid or hierarchical binning
//! via [`QuadSphereCoord::to_unit_square`].

use glam::DVec3;

use crate::inverse::{face_of, sphere_to_cube_face0};
use crate::permutation::{from_face_local, to_face_local};
use crate::projection::cube_to_sphere;
use crate::{CubeFace, CubeSphereError, QuadSphereCoord};

/// Quad-sphere coordinates of a *unit* direction.
#[must_use]
pub fn encode(dir: DVec3) -> QuadSphereCoord {
    let face = face_of(dir);
    let local = to_face_local(face, dir);
    debug_assert!(
        local.z >= local.x.abs() && local.z >= local.y.abs(),
        "face-local direction {local:?} is not on the +Z face"
    );
    let cube = sphere_to_cube_face0(local);
    debug_assert!(
        (cube.z - 1.0).abs() < 1e-4,
        "inverse warp left the +Z face: {cube:?}"
    );
    QuadSphereCoord {
        face,
        x: cube.x,
        y: cube.y,
    }
}

/// Unit direction for a face and face-local coordinates in `[-1, 1]`.
#[must_use]
pub fn decode(face: CubeFace, x: f64, y: f64) -> DVec3 {
    let cube = from_face_local(face, DVec3::new(x, y, 1.0));
    cube_to_sphere(cube)
}

/// [`decode`] with a raw face number.
///
/// # Errors
///
/// Returns [`CubeSphereError::InvalidFaceIndex`] if `face` is not in `0..=5`.
pub fn decode_index(face: i64, x: f64, y: f64) -> Result<DVec3, CubeSphereError> {
    let face = CubeFace::try_from(face)?;
    Ok(decode(face, x, y))
}

/// The unit direction through the center of `face`.
#[inline]
#[must_use]
pub fn face_center(face: CubeFace) -> DVec3 {
    decode(face, 0.0, 0.0)
}
