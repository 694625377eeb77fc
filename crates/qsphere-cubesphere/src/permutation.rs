//! Face-local frames: signed axis permutations between each face and face 0.
//!
//! Every face is handled as if it were the canonical `+Z` face. The map from
//! face 0's frame to face `f`'s frame is a pure axis permutation with sign
//! flips (possibly improper), so converting between frames never introduces
//! floating-point error.

use glam::DVec3;

use crate::CubeFace;

/// An axis permutation with per-axis sign flips.
///
/// Output component `i` is `source[axes[i]]`, negated when `negate[i]` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignedPermutation {
    /// Source axis for each output axis.
    pub axes: [usize; 3],
    /// Whether each output axis is negated.
    pub negate: [bool; 3],
}

impl SignedPermutation {
    /// The identity permutation.
    pub const IDENTITY: SignedPermutation = SignedPermutation::new([0, 1, 2], [false; 3]);

    /// Construct a permutation. `axes` must be a permutation of `[0, 1, 2]`.
    #[must_use]
    pub const fn new(axes: [usize; 3], negate: [bool; 3]) -> Self {
        assert!(
            axes[0] < 3 && axes[1] < 3 && axes[2] < 3,
            "axis out of range"
        );
        assert!(
            axes[0] != axes[1] && axes[1] != axes[2] && axes[0] != axes[2],
            "axes must be a permutation"
        );
        Self { axes, negate }
    }

    /// The inverse permutation, so that `p.inverse().apply(p.apply(v)) == v`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        let mut axes = [0usize; 3];
        let mut negate = [false; 3];
        let mut i = 0;
        while i < 3 {
            axes[self.axes[i]] = i;
            negate[self.axes[i]] = self.negate[i];
            i += 1;
        }
        Self { axes, negate }
    }

    /// Composition: applying the result equals applying `self`, then `next`.
    #[must_use]
    pub const fn then(self, next: SignedPermutation) -> Self {
        let mut axes = [0usize; 3];
        let mut negate = [false; 3];
        let mut i = 0;
        while i < 3 {
            axes[i] = self.axes[next.axes[i]];
            negate[i] = self.negate[next.axes[i]] ^ next.negate[i];
            i += 1;
        }
        Self { axes, negate }
    }

    /// `true` if the determinant is `+1` (a rotation), `false` for a reflection.
    #[must_use]
    pub const fn is_proper(self) -> bool {
        // A 3-cycle is even; any permutation with a fixed point other than
        // the identity is a single transposition.
        let even = self.axes[0] != 0 && self.axes[1] != 1 && self.axes[2] != 2
            || self.axes[0] == 0 && self.axes[1] == 1 && self.axes[2] == 2;
        let flips = self.negate[0] as u8 + self.negate[1] as u8 + self.negate[2] as u8;
        even == (flips % 2 == 0)
    }

    /// Apply the permutation to a vector.
    #[inline]
    #[must_use]
    pub fn apply(self, v: DVec3) -> DVec3 {
        let src = v.to_array();
        let mut out = [0.0; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let s = src[self.axes[i]];
            *c = if self.negate[i] { -s } else { s };
        }
        DVec3::from_array(out)
    }
}

/// Frame changes from face 0 to face `f`, indexed by face number.
///
/// | face | x' | y' | z' |
/// |------|----|----|----|
/// | 0    | x  | y  | z  |
/// | 1    | z  | x  | y  |
/// | 2    | −y | −z | x  |
/// | 3    | −z | x  | −y |
/// | 4    | y  | z  | x  |
/// | 5    | −y | x  | −z |
pub const FROM_FACE0: [SignedPermutation; 6] = [
    SignedPermutation::IDENTITY,
    SignedPermutation::new([2, 0, 1], [false, false, false]),
    SignedPermutation::new([1, 2, 0], [true, true, false]),
    SignedPermutation::new([2, 0, 1], [true, false, true]),
    SignedPermutation::new([1, 2, 0], [false, false, false]),
    SignedPermutation::new([1, 0, 2], [true, false, true]),
];

/// Frame changes from face `f` to face 0, the element-wise inverse of [`FROM_FACE0`].
pub const TO_FACE0: [SignedPermutation; 6] = invert_table(FROM_FACE0);

const fn invert_table(table: [SignedPermutation; 6]) -> [SignedPermutation; 6] {
    let mut out = [SignedPermutation::IDENTITY; 6];
    let mut i = 0;
    while i < 6 {
        out[i] = table[i].inverse();
        i += 1;
    }
    out
}

/// Express a direction given in `face`'s frame in face 0's (`+Z`) frame.
///
/// A direction on `face` becomes a direction on `+Z`.
#[inline]
#[must_use]
pub fn to_face_local(face: CubeFace, v: DVec3) -> DVec3 {
    TO_FACE0[usize::from(face.index())].apply(v)
}

/// Inverse of [`to_face_local`]: move a face-0 direction onto `face`.
#[inline]
#[must_use]
pub fn from_face_local(face: CubeFace, v: DVec3) -> DVec3 {
    FROM_FACE0[usize::from(face.index())].apply(v)
}

/// Move `v` from face 0 onto face number `face` in place.
///
/// Face numbers outside `0..=5` leave `v` unchanged.
pub fn permute_face(face: i64, v: &mut DVec3) {
    if let Ok(face) = CubeFace::try_from(face) {
        *v = from_face_local(face, *v);
    }
}

/// Move `v` from face number `face` onto face 0 in place.
///
/// Face numbers outside `0..=5` leave `v` unchanged.
pub fn permute_face_inverse(face: i64, v: &mut DVec3) {
    if let Ok(face) = CubeFace::try_from(face) {
        *v = to_face_local(face, *v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    fn random_vector(rng: &mut Xoshiro256StarStar) -> DVec3 {
        DVec3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_forward_table_matches_listed_remaps() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let expected = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(3.0, 1.0, 2.0),
            DVec3::new(-2.0, -3.0, 1.0),
            DVec3::new(-3.0, 1.0, -2.0),
            DVec3::new(2.0, 3.0, 1.0),
            DVec3::new(-2.0, 1.0, -3.0),
        ];
        for face in CubeFace::ALL {
            assert_eq!(
                from_face_local(face, v),
                expected[usize::from(face.index())],
                "forward remap wrong for {face:?}"
            );
        }
    }

    #[test]
    fn test_inverse_table_matches_listed_remaps() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let expected = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(2.0, 3.0, 1.0),
            DVec3::new(3.0, -1.0, -2.0),
            DVec3::new(2.0, -3.0, -1.0),
            DVec3::new(3.0, 1.0, 2.0),
            DVec3::new(2.0, -1.0, -3.0),
        ];
        for face in CubeFace::ALL {
            assert_eq!(
                to_face_local(face, v),
                expected[usize::from(face.index())],
                "inverse remap wrong for {face:?}"
            );
        }
    }

    #[test]
    fn test_inverse_law_is_exact() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        for face in CubeFace::ALL {
            for _ in 0..100 {
                let v = random_vector(&mut rng);
                assert_eq!(from_face_local(face, to_face_local(face, v)), v);
                assert_eq!(to_face_local(face, from_face_local(face, v)), v);
            }
        }
    }

    #[test]
    fn test_face_normal_maps_to_plus_z() {
        for face in CubeFace::ALL {
            assert_eq!(to_face_local(face, face.normal()), DVec3::Z);
            assert_eq!(from_face_local(face, DVec3::Z), face.normal());
        }
    }

    #[test]
    fn test_composition_with_inverse_is_identity() {
        for p in FROM_FACE0 {
            assert_eq!(p.then(p.inverse()), SignedPermutation::IDENTITY);
            assert_eq!(p.inverse().then(p), SignedPermutation::IDENTITY);
        }
    }

    #[test]
    fn test_then_applies_in_order() {
        let v = DVec3::new(1.0, -2.0, 5.0);
        let a = FROM_FACE0[2];
        let b = FROM_FACE0[5];
        assert_eq!(a.then(b).apply(v), b.apply(a.apply(v)));
    }

    #[test]
    fn test_handedness_matches_determinant() {
        for p in FROM_FACE0 {
            let x = p.apply(DVec3::X);
            let y = p.apply(DVec3::Y);
            let z = p.apply(DVec3::Z);
            let det = x.cross(y).dot(z);
            assert_eq!(p.is_proper(), det > 0.0, "handedness mismatch for {p:?}");
        }
        assert!(FROM_FACE0[2].is_proper());
        assert!(!FROM_FACE0[5].is_proper());
    }

    #[test]
    fn test_out_of_range_face_is_identity() {
        let original = DVec3::new(0.25, -0.5, 0.75);
        for face in [-1, 6, 100, i64::MIN] {
            let mut v = original;
            permute_face(face, &mut v);
            assert_eq!(v, original);
            permute_face_inverse(face, &mut v);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn test_integer_permutation_matches_typed() {
        let original = DVec3::new(0.25, -0.5, 0.75);
        for face in CubeFace::ALL {
            let mut v = original;
            permute_face(i64::from(face.index()), &mut v);
            assert_eq!(v, from_face_local(face, original));
            permute_face_inverse(i64::from(face.index()), &mut v);
            assert_eq!(v, original);
        }
    }
}
