use nalgebra::Vector2;

use crate::{body::Body, Float};

#[inline]
pub fn get_angle(vec: &Vector2<Float>) -> Float {
    vec.y.atan2(vec.x)
}

#[inline]
pub fn get_components(magnitude: Float, angle: Float) -> Vector2<Float> {
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// Mass-weighted sum of velocities.
pub fn total_momentum<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Vector2<Float> {
    bodies
        .into_iter()
        .fold(Vector2::zeros(), |p, body| p + body.velocity * body.mass())
}
