pub mod stats;

/// 2D point type. Geographic degrees or local kilometers, depending on context.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-5;

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Returns `-1.0`, `0.0` or `1.0` according to the sign of `value`.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Returns whether two points coincide within [`TOLERANCE`] in both coordinates.
#[must_use]
pub fn points_equal_eps(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

#[must_use]
pub fn km_to_m(km: f64) -> f64 {
    km * METERS_PER_KM
}

#[must_use]
pub fn m_to_km(m: f64) -> f64 {
    m / METERS_PER_KM
}
