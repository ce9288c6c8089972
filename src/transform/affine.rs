//! Affine transform helpers.

use crate::foundation::core::{Affine, Point};

/// Rigid rotation by `radians` about `center`.
///
/// Positive angles rotate from +x toward +y, which is clockwise on screen in
/// the y-down coordinate space used by symbol paths.
#[inline]
pub fn rotate_about(center: Point, radians: f64) -> Affine {
    let c = center.to_vec2();
    // T(center) * R(angle) * T(-center)
    Affine::translate(c) * Affine::rotate(radians) * Affine::translate(-c)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
