//! Sphere-to-cube inverse: face classification and the face-0 inverse warp.

use std::f64::consts::FRAC_1_SQRT_2;

use glam::DVec3;

use crate::CubeFace;

/// Determine which cube face a direction belongs to.
///
/// The face is picked by the axis with the largest absolute component, and
/// the sign of that component selects between the two faces on the axis.
/// Ties are broken by axis priority X, then Y, then Z. The direction does
/// not need to be unit length.
///
/// A dominant component of exactly zero counts as negative, so the zero
/// vector maps to [`CubeFace::NegX`]. A direction containing NaN fails every
/// comparison and maps to [`CubeFace::PosZ`].
#[must_use]
pub fn face_of(dir: DVec3) -> CubeFace {
    let ax = dir.x.abs();
    let ay = dir.y.abs();
    let az = dir.z.abs();

    if ax >= ay && ax >= az {
        if dir.x > 0.0 {
            CubeFace::PosX
        } else {
            CubeFace::NegX
        }
    } else if ay >= az && ay >= ax {
        if dir.y > 0.0 {
            CubeFace::PosY
        } else {
            CubeFace::NegY
        }
    } else if az >= ax && az >= ay {
        if dir.z > 0.0 {
            CubeFace::PosZ
        } else {
            CubeFace::NegZ
        }
    } else {
        CubeFace::PosZ
    }
}

/// Face number (`0..=5`) of the face a direction belongs to. See [`face_of`].
#[inline]
#[must_use]
pub fn face_index_of(dir: DVec3) -> u8 {
    face_of(dir).index()
}

/// Invert the cube-to-sphere warp on the `+Z` face.
///
/// `v` must be a unit direction already expressed in face 0's frame, with
/// `z` the dominant, positive component. Returns `(x, y, 1)` where `x` and
/// `y` are the flat face coordinates in `[-1, 1]`. The `z` component carries
/// no information.
///
/// Components smaller than `sqrt(f64::EPSILON)` snap to zero, where the
/// closed form loses all precision to cancellation.
#[must_use]
pub fn sphere_to_cube_face0(v: DVec3) -> DVec3 {
    let eps = f64::EPSILON.sqrt();
    let x = v.x;
    let y = v.y;

    let a2 = x * x * 2.0;
    let b2 = y * y * 2.0;
    let inner = -a2 + b2 - 3.0;
    let innersqrt = -(inner * inner - 12.0 * a2).max(0.0).sqrt();

    let cx = if x.abs() < eps {
        0.0
    } else {
        (innersqrt + a2 - b2 + 3.0).max(0.0).sqrt() * FRAC_1_SQRT_2
    };
    let cy = if y.abs() < eps {
        0.0
    } else {
        (innersqrt - a2 + b2 + 3.0).max(0.0).sqrt() * FRAC_1_SQRT_2
    };

    DVec3::new(
        if x < 0.0 { -cx } else { cx },
        if y < 0.0 { -cy } else { cy },
        1.0,
    )
}

/// In-place form of [`sphere_to_cube_face0`].
#[inline]
pub fn sphere_to_cube_face0_in_place(v: &mut DVec3) {
    *v = sphere_to_cube_face0(*v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::cube_to_sphere;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_face_detection_axis_aligned_directions() {
        assert_eq!(face_of(DVec3::Z), CubeFace::PosZ);
        assert_eq!(face_of(DVec3::X), CubeFace::PosX);
        assert_eq!(face_of(DVec3::NEG_Y), CubeFace::NegY);
        assert_eq!(face_of(DVec3::NEG_X), CubeFace::NegX);
        assert_eq!(face_of(DVec3::Y), CubeFace::PosY);
        assert_eq!(face_of(DVec3::NEG_Z), CubeFace::NegZ);
        assert_eq!(face_index_of(DVec3::X), 1);
        assert_eq!(face_index_of(DVec3::NEG_Z), 5);
    }

    #[test]
    fn test_dominant_sign_matches_face_normal() {
        let dirs = [
            DVec3::new(0.3, -0.9, 0.2),
            DVec3::new(-0.5, -0.7, 0.5),
            DVec3::new(0.1, 0.2, -0.95),
            DVec3::new(-0.8, 0.1, 0.55),
            DVec3::new(0.6, 0.1, 0.59),
            DVec3::new(0.0, 0.71, -0.7),
        ];
        for dir in dirs {
            let dir = dir.normalize();
            let face = face_of(dir);
            let n = face.normal();
            let along = dir.dot(n);
            assert!(along > 0.0, "{dir:?} points away from {face:?}");
            assert!(
                along >= dir.x.abs() && along >= dir.y.abs() && along >= dir.z.abs(),
                "{face:?} is not the dominant axis of {dir:?}"
            );
        }
    }

    #[test]
    fn test_random_directions_land_on_dominant_face() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2024);
        let mut face_counts = [0u32; 6];
        for _ in 0..10_000 {
            let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let z: f64 = rng.gen_range(-1.0..1.0);
            let r = (1.0 - z * z).sqrt();
            let dir = DVec3::new(r * theta.cos(), r * theta.sin(), z).normalize();

            let face = face_of(dir);
            face_counts[usize::from(face.index())] += 1;
            let along = dir.dot(face.normal());
            assert!(along > 0.0, "{dir:?} points away from {face:?}");
            assert_eq!(
                along,
                dir.abs().max_element(),
                "{face:?} is not the dominant axis of {dir:?}"
            );
            // Exactly one face claims the direction: no other normal is as aligned.
            for other in CubeFace::ALL {
                if other != face {
                    assert!(dir.dot(other.normal()) <= along);
                }
            }
        }
        assert!(face_counts.iter().all(|&n| n > 0), "{face_counts:?}");
    }

    #[test]
    fn test_ties_prefer_x_then_y() {
        assert_eq!(face_of(DVec3::new(1.0, 1.0, 0.0)), CubeFace::PosX);
        assert_eq!(face_of(DVec3::new(1.0, 1.0, 1.0)), CubeFace::PosX);
        assert_eq!(face_of(DVec3::new(0.0, -1.0, 1.0)), CubeFace::NegY);
        assert_eq!(face_of(DVec3::new(-1.0, 0.0, -1.0)), CubeFace::NegX);
    }

    #[test]
    fn test_face_of_ignores_length() {
        let dir = DVec3::new(0.2, -0.3, 0.9);
        assert_eq!(face_of(dir), face_of(dir * 1000.0));
        assert_eq!(face_of(dir), face_of(dir * 1e-6));
    }

    #[test]
    fn test_face_of_zero_vector() {
        assert_eq!(face_of(DVec3::ZERO), CubeFace::NegX);
    }

    #[test]
    fn test_face_of_nan_vector() {
        assert_eq!(face_of(DVec3::NAN), CubeFace::PosZ);
    }

    #[test]
    fn test_inverse_warp_recovers_face_coordinates() {
        // Interior grid; the face edge itself is covered separately.
        for i in 0..=18 {
            for j in 0..=18 {
                let x = i as f64 / 9.0 - 1.0;
                let y = j as f64 / 9.0 - 1.0;
                let sphere = cube_to_sphere(DVec3::new(x, y, 1.0));
                let cube = sphere_to_cube_face0(sphere);
                assert!(
                    (cube.x - x).abs() < EPSILON && (cube.y - y).abs() < EPSILON,
                    "({x}, {y}) recovered as ({}, {})",
                    cube.x,
                    cube.y
                );
                assert_eq!(cube.z, 1.0);
            }
        }
    }

    #[test]
    fn test_inverse_warp_face_center_is_origin() {
        let cube = sphere_to_cube_face0(DVec3::Z);
        assert_eq!(cube, DVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_inverse_warp_snaps_tiny_components() {
        let v = DVec3::new(1e-10, -1e-10, 1.0).normalize();
        let cube = sphere_to_cube_face0(v);
        assert_eq!(cube.x, 0.0);
        assert_eq!(cube.y, 0.0);
    }

    #[test]
    fn test_inverse_warp_copies_signs() {
        let sphere = cube_to_sphere(DVec3::new(-0.4, 0.6, 1.0));
        let cube = sphere_to_cube_face0(sphere);
        assert!(cube.x < 0.0);
        assert!(cube.y > 0.0);
    }

    #[test]
    fn test_inverse_warp_face_corner() {
        let corner = DVec3::ONE.normalize();
        let cube = sphere_to_cube_face0(corner);
        assert!((cube.x - 1.0).abs() < 1e-7);
        assert!((cube.y - 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_in_place_matches_value_form() {
        let original = DVec3::new(0.3, -0.2, 0.9).normalize();
        let mut v = original;
        sphere_to_cube_face0_in_place(&mut v);
        assert_eq!(v, sphere_to_cube_face0(original));
    }
}
