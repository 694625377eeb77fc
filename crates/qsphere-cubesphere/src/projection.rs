//! Forward warp from the cube surface to the unit sphere.

use glam::DVec3;

/// Analytic cube-to-sphere warp with near-uniform cell area.
///
/// Given a point on (or near) the `[-1, 1]` cube surface, each component is
/// scaled by a factor depending on the squares of the other two, then the
/// result is renormalized:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
///
/// Radicands are clamped at zero, so inputs slightly outside the cube never
/// produce NaN. A zero input stays zero.
#[inline]
#[must_use]
pub fn cube_to_sphere(cube_point: DVec3) -> DVec3 {
    let xx = cube_point.x * cube_point.x;
    let yy = cube_point.y * cube_point.y;
    let zz = cube_point.z * cube_point.z;

    let warped = DVec3::new(
        cube_point.x * warp_factor(yy, zz),
        cube_point.y * warp_factor(zz, xx),
        cube_point.z * warp_factor(xx, yy),
    );
    warped.normalize_or_zero()
}

/// In-place form of [`cube_to_sphere`].
#[inline]
pub fn cube_to_sphere_in_place(v: &mut DVec3) {
    *v = cube_to_sphere(*v);
}

#[inline]
fn warp_factor(a: f64, b: f64) -> f64 {
    (1.0 - a * 0.5 - b * 0.5 + a * b / 3.0).max(0.0).sqrt()
}
