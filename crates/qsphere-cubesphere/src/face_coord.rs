//! Quad-sphere coordinates: a face number plus a flat position on that face.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::CubeFace;

/// A point on the quad-sphere: which face, and where on the flattened face.
///
/// `x` and `y` are in `[-1, 1]` and measured in the face's local frame, where
/// every face looks like the `+Z` face. `(0, 0)` is the face center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadSphereCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// First face-local coordinate in \[-1, 1\].
    pub x: f64,
    /// Second face-local coordinate in \[-1, 1\].
    pub y: f64,
}

impl QuadSphereCoord {
    /// Construct a `QuadSphereCoord`, clamping `x` and `y` to \[-1, 1\].
    #[must_use]
    pub fn new(face: CubeFace, x: f64, y: f64) -> Self {
        Self {
            face,
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Construct without clamping. Caller guarantees `-1 <= x, y <= 1`.
    #[must_use]
    pub fn new_unchecked(face: CubeFace, x: f64, y: f64) -> Self {
        debug_assert!((-1.0..=1.0).contains(&x), "x out of range: {x}");
        debug_assert!((-1.0..=1.0).contains(&y), "y out of range: {y}");
        Self { face, x, y }
    }

    /// Quad-sphere coordinates of a unit direction. See [`encode`](crate::encode).
    #[must_use]
    pub fn from_direction(dir: DVec3) -> Self {
        crate::encode(dir)
    }

    /// The unit direction these coordinates name. See [`decode`](crate::decode).
    #[must_use]
    pub fn to_direction(&self) -> DVec3 {
        crate::decode(self.face, self.x, self.y)
    }

    /// The face position remapped to the unit square, `(x/2 + 1/2, y/2 + 1/2)`.
    ///
    /// Grid and hierarchical index schemes bin this form.
    #[must_use]
    pub fn to_unit_square(&self) -> (f64, f64) {
        (self.x * 0.5 + 0.5, self.y * 0.5 + 0.5)
    }
}
