#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector using 32-bit floating point coordinates, used for positions and directions.
///
/// # Examples
///
/// ```
/// use vectorf::core::prelude::*;
///
/// let v1 = Vector2f::new(3.0, 4.0);
/// let v2 = Vector2f::splat(1.0);
/// assert_eq!(v1 + v2, Vector2f::new(4.0, 5.0));
/// assert_eq!(v1.length(), 5.0);
/// ```
///
/// # Equality
/// Equality is exact component comparison with no tolerance, so `NaN` components never compare
/// equal and `0.0 == -0.0`. Vectors that differ only by rounding compare unequal; use
/// [`almost_eq`](Vector2f::almost_eq) where tolerance is wanted.
///
/// # Degenerate inputs
/// Operations never fail. Where a result is undefined they return a sentinel instead:
/// - the zero vector from [`normalize`](Vector2f::normalize) and
///   [`normalized`](Vector2f::normalized) when the length is at most [`EPSILON`];
/// - a `NaN` vector from [`normalize_unsafe`](Vector2f::normalize_unsafe) on a zero vector, and
///   from [`limit`](Vector2f::limit) on a zero vector with a negative bound.
///
/// [`Default`] is the zero vector.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    /// Shorthand for `Vector2f::new(1.0, 0.0)`.
    pub const AXIS_X: Vector2f = Vector2f::new(1.0, 0.0);
    /// Shorthand for `Vector2f::new(0.0, 1.0)`.
    pub const AXIS_Y: Vector2f = Vector2f::new(0.0, 1.0);
    /// Shorthand for `Vector2f::splat(1.0)`.
    pub const ONE: Vector2f = Vector2f::splat(1.0);
    /// Shorthand for `Vector2f::splat(0.0)`.
    pub const ZERO: Vector2f = Vector2f::splat(0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vector2f {
        Vector2f { x, y }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorf::core::prelude::*;
    /// let vec = Vector2f::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub const fn splat(value: f32) -> Vector2f {
        Vector2f { x: value, y: value }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`length`](Vector2f::length) when comparing lengths to avoid the
    /// square root. May overflow to infinity for very large components.
    #[must_use]
    pub fn length_sqr(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        math::sqrt(self.length_sqr())
    }

    /// Shortens the vector in place so that its length doesn't exceed `value`.
    ///
    /// Assumes `value >= 0.0`. If the vector has length zero and `value` is negative, the
    /// vector becomes a `NaN` vector.
    pub fn limit(&mut self, value: f32) -> &mut Self {
        let length = self.length();
        if length > value {
            *self *= value / length;
        }
        self
    }

    /// Scales the vector in place to unit length.
    ///
    /// If the length is at most [`EPSILON`] the vector becomes the zero vector.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length > EPSILON {
            *self *= 1.0 / length;
        } else {
            *self = Vector2f::ZERO;
        }
        self
    }

    /// Scales the vector in place to unit length without guarding against zero length.
    ///
    /// A zero vector becomes a `NaN` vector.
    pub fn normalize_unsafe(&mut self) -> &mut Self {
        let scale = 1.0 / self.length();
        *self *= scale;
        self
    }

    /// Returns a copy of the vector whose length doesn't exceed `value`.
    ///
    /// See [`limit`](Vector2f::limit) for the degenerate case.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorf::core::prelude::*;
    /// let v = Vector2f::new(3.0, 4.0);
    /// assert_eq!(v.limited(2.5), Vector2f::new(1.5, 2.0));
    /// assert_eq!(v.limited(10.0), v);
    /// ```
    #[must_use]
    pub fn limited(&self, value: f32) -> Vector2f {
        let mut rv = *self;
        rv.limit(value);
        rv
    }

    /// Returns a unit vector in the same direction, or the zero vector if the length is at
    /// most [`EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorf::core::prelude::*;
    /// assert_eq!(Vector2f::new(0.0, -2.0).normalized(), Vector2f::new(0.0, -1.0));
    /// assert_eq!(Vector2f::ZERO.normalized(), Vector2f::ZERO);
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Vector2f {
        let mut rv = *self;
        rv.normalize();
        rv
    }

    /// Returns a unit vector in the same direction. A zero vector gives a `NaN` vector.
    #[must_use]
    pub fn normalized_unsafe(&self) -> Vector2f {
        let mut rv = *self;
        rv.normalize_unsafe();
        rv
    }

    /// Converts to a [`Vector3f`] on the horizontal plane: `(x, y)` becomes `(x, 0, y)`.
    #[must_use]
    pub fn x0y(&self) -> Vector3f {
        Vector3f::new(self.x, 0.0, self.y)
    }

    /// Converts to a [`Vector3f`] with `z = 0`.
    #[must_use]
    pub fn xy0(&self) -> Vector3f {
        Vector3f::from_xy(*self, 0.0)
    }

    /// Returns true if either component is `NaN`.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`ALMOST_EQ_EPSILON`].
    #[must_use]
    pub fn almost_eq(&self, rhs: Vector2f) -> bool {
        (*self - rhs).length() < ALMOST_EQ_EPSILON
    }

    /// Compares two vectors based on their squared length.
    ///
    /// If either length is `NaN`, falls back to [`total_cmp()`](f32::total_cmp) and logs a
    /// rate-limited warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vector2f) -> Ordering {
        let self_len = self.length_sqr();
        let other_len = other.length_sqr();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            crate::warn_every_seconds!(
                1,
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self,
                other
            );
            self_len.total_cmp(&other_len)
        })
    }

    /// Compares two vectors based on their distance from `origin`.
    ///
    /// Falls back to [`total_cmp()`](f32::total_cmp) as [`cmp_by_length`](Vector2f::cmp_by_length)
    /// does.
    #[must_use]
    pub fn cmp_by_dist(&self, other: &Vector2f, origin: Vector2f) -> Ordering {
        let self_len = math::distance_sqr(origin, *self);
        let other_len = math::distance_sqr(origin, *other);
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            crate::warn_every_seconds!(
                1,
                "cmp_by_dist() to {}: partial_cmp() failed: {} vs. {}",
                origin,
                self,
                other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vector2f {
    fn zero() -> Self {
        Vector2f::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Vector2f::ZERO
    }
}

impl From<[f32; 2]> for Vector2f {
    fn from(value: [f32; 2]) -> Self {
        Vector2f {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(f32, f32)> for Vector2f {
    fn from(value: (f32, f32)) -> Self {
        Vector2f {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Vector2f> for [f32; 2] {
    fn from(value: Vector2f) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vector2f> for Vector2f {
    type Output = Vector2f;

    fn add(self, rhs: Vector2f) -> Self::Output {
        Vector2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vector2f> for Vector2f {
    fn add_assign(&mut self, rhs: Vector2f) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vector2f> for Vector2f {
    type Output = Vector2f;

    fn sub(self, rhs: Vector2f) -> Self::Output {
        Vector2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vector2f> for Vector2f {
    fn sub_assign(&mut self, rhs: Vector2f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vector2f> for Vector2f {
    fn sum<I: Iterator<Item = Vector2f>>(iter: I) -> Self {
        iter.fold(Vector2f::ZERO, Vector2f::add)
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vector2f> for f32 {
    type Output = Vector2f;

    fn mul(self, rhs: Vector2f) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector2f {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vector2f {
    type Output = Vector2f;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2f {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vector2f {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;

    fn neg(self) -> Self::Output {
        Vector2f {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vector2f {
    type Output = Vector2f;

    fn neg(self) -> Self::Output {
        -*self
    }
}

/// A 3D vector using 32-bit floating point coordinates.
///
/// Mirrors [`Vector2f`]: exact equality, the same operators, and the same degenerate-case
/// policy for normalisation and limiting.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const AXIS_X: Vector3f = Vector3f::new(1.0, 0.0, 0.0);
    pub const AXIS_Y: Vector3f = Vector3f::new(0.0, 1.0, 0.0);
    pub const AXIS_Z: Vector3f = Vector3f::new(0.0, 0.0, 1.0);
    pub const ONE: Vector3f = Vector3f::splat(1.0);
    pub const ZERO: Vector3f = Vector3f::splat(0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3f {
        Vector3f { x, y, z }
    }

    #[must_use]
    pub const fn splat(value: f32) -> Vector3f {
        Vector3f {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Extends a [`Vector2f`] with a `z` component.
    #[must_use]
    pub const fn from_xy(xy: Vector2f, z: f32) -> Vector3f {
        Vector3f {
            x: xy.x,
            y: xy.y,
            z,
        }
    }

    /// Drops the `z` component. Inverse of [`Vector2f::xy0`].
    #[must_use]
    pub fn xy(&self) -> Vector2f {
        Vector2f::new(self.x, self.y)
    }

    /// Drops the `y` component. Inverse of [`Vector2f::x0y`].
    #[must_use]
    pub fn xz(&self) -> Vector2f {
        Vector2f::new(self.x, self.z)
    }

    #[must_use]
    pub fn length_sqr(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        math::sqrt(self.length_sqr())
    }

    /// Shortens the vector in place so that its length doesn't exceed `value`.
    ///
    /// Same degenerate case as [`Vector2f::limit`].
    pub fn limit(&mut self, value: f32) -> &mut Self {
        let length = self.length();
        if length > value {
            *self *= value / length;
        }
        self
    }

    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length > EPSILON {
            *self *= 1.0 / length;
        } else {
            *self = Vector3f::ZERO;
        }
        self
    }

    pub fn normalize_unsafe(&mut self) -> &mut Self {
        let scale = 1.0 / self.length();
        *self *= scale;
        self
    }

    #[must_use]
    pub fn limited(&self, value: f32) -> Vector3f {
        let mut rv = *self;
        rv.limit(value);
        rv
    }

    #[must_use]
    pub fn normalized(&self) -> Vector3f {
        let mut rv = *self;
        rv.normalize();
        rv
    }

    #[must_use]
    pub fn normalized_unsafe(&self) -> Vector3f {
        let mut rv = *self;
        rv.normalize_unsafe();
        rv
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vector3f) -> bool {
        (*self - rhs).length() < ALMOST_EQ_EPSILON
    }
}

impl Zero for Vector3f {
    fn zero() -> Self {
        Vector3f::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Vector3f::ZERO
    }
}

impl From<[f32; 3]> for Vector3f {
    fn from(value: [f32; 3]) -> Self {
        Vector3f {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vector3f> for [f32; 3] {
    fn from(value: Vector3f) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl Add<Vector3f> for Vector3f {
    type Output = Vector3f;

    fn add(self, rhs: Vector3f) -> Self::Output {
        Vector3f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vector3f> for Vector3f {
    fn add_assign(&mut self, rhs: Vector3f) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vector3f> for Vector3f {
    type Output = Vector3f;

    fn sub(self, rhs: Vector3f) -> Self::Output {
        Vector3f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vector3f> for Vector3f {
    fn sub_assign(&mut self, rhs: Vector3f) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vector3f> for Vector3f {
    fn sum<I: Iterator<Item = Vector3f>>(iter: I) -> Self {
        iter.fold(Vector3f::ZERO, Vector3f::add)
    }
}

impl Mul<f32> for Vector3f {
    type Output = Vector3f;

    fn mul(self, rhs: f32) -> Self::Output {
        Vector3f {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vector3f> for f32 {
    type Output = Vector3f;

    fn mul(self, rhs: Vector3f) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector3f {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vector3f {
    type Output = Vector3f;

    fn div(self, rhs: f32) -> Self::Output {
        Vector3f {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vector3f {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vector3f {
    type Output = Vector3f;

    fn neg(self) -> Self::Output {
        Vector3f {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl Neg for &Vector3f {
    type Output = Vector3f;

    fn neg(self) -> Self::Output {
        -*self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_nan_vector(v: Vector2f) {
        assert!(v.x.is_nan(), "expected NaN x, got {v}");
        assert!(v.y.is_nan(), "expected NaN y, got {v}");
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < ALMOST_EQ_EPSILON, "expected {b}, got {a}");
    }

    // ==================== Vector2f Basic Operations ====================

    #[test]
    fn vector2f_constants() {
        assert_eq!(Vector2f::AXIS_X, Vector2f::new(1.0, 0.0));
        assert_eq!(Vector2f::AXIS_Y, Vector2f::new(0.0, 1.0));
        assert_eq!(Vector2f::ONE, Vector2f::new(1.0, 1.0));
        assert_eq!(Vector2f::ZERO, Vector2f::new(0.0, 0.0));
        assert_eq!(Vector2f::default(), Vector2f::ZERO);
        assert_eq!(Vector2f::splat(-1.5), Vector2f::new(-1.5, -1.5));
    }

    #[test]
    fn vector2f_equality_is_exact() {
        let a = Vector2f::new(0.1 + 0.6, 1.0);
        let b = Vector2f::new(0.7, 1.0);
        assert_ne!(a, b);
        assert!(a.almost_eq(b));

        assert_eq!(Vector2f::new(0.0, -0.0), Vector2f::ZERO);
        let nan = Vector2f::new(f32::NAN, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn vector2f_addition() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(3.0, 4.0);
        assert_eq!(a + b, Vector2f::new(4.0, 6.0));
    }

    #[test]
    fn vector2f_subtraction() {
        let a = Vector2f::new(5.0, 6.0);
        let b = Vector2f::new(3.0, 4.0);
        assert_eq!(a - b, Vector2f::new(2.0, 2.0));
    }

    #[test]
    fn vector2f_add_then_sub_cancels_for_integral_values() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let a = Vector2f::new(
                rng.gen_range(-10_000..10_000) as f32,
                rng.gen_range(-10_000..10_000) as f32,
            );
            let b = Vector2f::new(
                rng.gen_range(-10_000..10_000) as f32,
                rng.gen_range(-10_000..10_000) as f32,
            );
            assert_eq!(a + b - b, a);
        }
    }

    #[test]
    fn vector2f_compound_assignment() {
        let mut a = Vector2f::new(1.0, 2.0);
        a += Vector2f::new(3.0, 4.0);
        assert_eq!(a, Vector2f::new(4.0, 6.0));
        a -= Vector2f::new(1.0, 2.0);
        assert_eq!(a, Vector2f::new(3.0, 4.0));
        a *= 2.0;
        assert_eq!(a, Vector2f::new(6.0, 8.0));
        a /= 4.0;
        assert_eq!(a, Vector2f::new(1.5, 2.0));
    }

    #[test]
    fn vector2f_scalar_multiplication() {
        let a = Vector2f::new(1.0, -3.0);
        assert_eq!(a * 2.0, Vector2f::new(2.0, -6.0));
        assert_eq!(2.0 * a, Vector2f::new(2.0, -6.0));
    }

    #[test]
    fn vector2f_division_is_unguarded() {
        let a = Vector2f::new(4.0, -6.0);
        assert_eq!(a / 2.0, Vector2f::new(2.0, -3.0));

        let inf = a / 0.0;
        assert_eq!(inf, Vector2f::new(f32::INFINITY, f32::NEG_INFINITY));
        assert_nan_vector(Vector2f::ZERO / 0.0);
    }

    #[test]
    fn vector2f_negation() {
        let a = Vector2f::new(1.0, -2.0);
        assert_eq!(-a, Vector2f::new(-1.0, 2.0));
        assert_eq!(-&a, Vector2f::new(-1.0, 2.0));
    }

    #[test]
    fn vector2f_conversions() {
        let v: Vector2f = [1.0_f32, 2.0_f32].into();
        assert_eq!(v, Vector2f::new(1.0, 2.0));
        let v: Vector2f = (3.0, 4.0).into();
        assert_eq!(v, Vector2f::new(3.0, 4.0));
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [3.0, 4.0]);
    }

    #[test]
    fn vector2f_sum() {
        let vecs = vec![
            Vector2f::new(1.0, 2.0),
            Vector2f::new(3.0, -4.0),
            Vector2f::new(5.0, 6.0),
        ];
        let sum: Vector2f = vecs.into_iter().sum();
        assert_eq!(sum, Vector2f::new(9.0, 4.0));
        assert_eq!(std::iter::empty::<Vector2f>().sum::<Vector2f>(), Vector2f::ZERO);
    }

    #[test]
    fn vector2f_zero_trait() {
        assert!(<Vector2f as Zero>::zero().is_zero());
        assert!(Vector2f::new(-0.0, 0.0).is_zero());
        assert!(!Vector2f::new(1e-30, 0.0).is_zero());
    }

    #[test]
    fn vector2f_display() {
        let v = Vector2f::new(1.5, 2.5);
        assert_eq!(format!("{v}"), "vec(1.5, 2.5)");

        let v2 = Vector2f::new(1.23456, 7.89012);
        assert_eq!(format!("{v2:.2}"), "vec(1.23, 7.89)");
        assert_eq!(format!("{v2:.0}"), "vec(1, 8)");
    }

    // ==================== Vector2f Length Family ====================

    #[test]
    fn vector2f_length_and_length_sqr() {
        let v = Vector2f::new(3.0, 4.0);
        assert_eq!(v.length_sqr(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vector2f::new(3.0, -4.0).length(), 5.0);
        assert_eq!(Vector2f::splat(f32::MAX).length_sqr(), f32::INFINITY);
    }

    #[test]
    fn vector2f_normalized() {
        let n = Vector2f::new(3.0, 4.0).normalized();
        assert_close(n.length(), 1.0);
        assert_close(n.x, 0.6);
        assert_close(n.y, 0.8);
        assert_eq!(Vector2f::new(0.0, 5.0).normalized(), Vector2f::AXIS_Y);
    }

    #[test]
    fn vector2f_normalized_degenerate_returns_zero() {
        assert_eq!(Vector2f::new(0.0, 0.0).normalized(), Vector2f::ZERO);
        // Below the threshold counts as zero.
        assert_eq!(Vector2f::new(5e-8, 0.0).normalized(), Vector2f::ZERO);
        // Above it still normalises.
        assert!(Vector2f::new(1e-6, 0.0).normalized().almost_eq(Vector2f::AXIS_X));
        // NaN fails the threshold comparison.
        assert_eq!(Vector2f::new(f32::NAN, 1.0).normalized(), Vector2f::ZERO);
    }

    #[test]
    fn vector2f_normalize_in_place() {
        let mut v = Vector2f::new(-2.0, 0.0);
        v.normalize();
        assert_eq!(v, Vector2f::new(-1.0, 0.0));

        let mut z = Vector2f::new(-0.0, 0.0);
        z.normalize();
        assert_eq!(z.x.to_bits(), 0.0_f32.to_bits());

        // Returns self for chaining.
        let mut c = Vector2f::new(0.0, 8.0);
        assert_eq!(*c.normalize().limit(0.5), Vector2f::new(0.0, 0.5));
    }

    #[test]
    fn vector2f_normalized_unsafe() {
        let n = Vector2f::new(0.0, -4.0).normalized_unsafe();
        assert_eq!(n, Vector2f::new(0.0, -1.0));

        assert_nan_vector(Vector2f::new(0.0, 0.0).normalized_unsafe());

        let mut v = Vector2f::ZERO;
        v.normalize_unsafe();
        assert_nan_vector(v);
    }

    #[test]
    fn vector2f_limited() {
        let v = Vector2f::new(3.0, 4.0);
        let l = v.limited(2.5);
        assert_close(l.length(), 2.5);
        assert!(l.normalized().almost_eq(v.normalized()));
        assert_eq!(l, Vector2f::new(1.5, 2.0));

        // Shorter vectors are unchanged.
        assert_eq!(v.limited(5.0), v);
        assert_eq!(v.limited(100.0), v);
    }

    #[test]
    fn vector2f_limited_negative_on_zero_is_nan() {
        assert_nan_vector(Vector2f::new(0.0, 0.0).limited(-1.0));

        let mut v = Vector2f::ZERO;
        v.limit(-1.0);
        assert_nan_vector(v);

        // Zero limit on a zero vector leaves it alone.
        assert_eq!(Vector2f::ZERO.limited(0.0), Vector2f::ZERO);
    }

    #[test]
    fn vector2f_limit_in_place() {
        let mut v = Vector2f::new(0.0, 10.0);
        v.limit(2.0);
        assert_eq!(v, Vector2f::new(0.0, 2.0));
    }

    // ==================== Vector2f Conversions ====================

    #[test]
    fn vector2f_x0y_and_xy0() {
        let v = Vector2f::new(1.5, -2.0);
        assert_eq!(v.x0y(), Vector3f::new(1.5, 0.0, -2.0));
        assert_eq!(v.xy0(), Vector3f::new(1.5, -2.0, 0.0));
        assert_eq!(v.x0y().xz(), v);
    }

    #[test]
    fn vector2f_xy0_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vector2f::new(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
            assert_eq!(v.xy0().xy(), v);
        }
        let v = Vector2f::new(-0.0, f32::MIN_POSITIVE);
        assert_eq!(v.xy0().xy().x.to_bits(), (-0.0_f32).to_bits());
    }

    // ==================== Vector2f Comparisons ====================

    #[test]
    fn vector2f_is_nan() {
        assert!(!Vector2f::ONE.is_nan());
        assert!(Vector2f::new(0.0, f32::NAN).is_nan());
        assert!(!Vector2f::splat(f32::INFINITY).is_nan());
    }

    #[test]
    fn vector2f_cmp_by_length() {
        let short = Vector2f::new(1.0, 0.0);
        let long = Vector2f::new(0.0, -3.0);
        assert_eq!(short.cmp_by_length(&long), Ordering::Less);
        assert_eq!(long.cmp_by_length(&short), Ordering::Greater);
        assert_eq!(short.cmp_by_length(&Vector2f::AXIS_Y), Ordering::Equal);

        let mut vecs = [long, Vector2f::ZERO, short];
        vecs.sort_by(Vector2f::cmp_by_length);
        assert_eq!(vecs, [Vector2f::ZERO, short, long]);
    }

    #[test]
    fn vector2f_cmp_by_length_nan_falls_back_to_total_order() {
        let nan = Vector2f::new(f32::NAN, 0.0);
        assert_eq!(nan.cmp_by_length(&Vector2f::ONE), Ordering::Greater);
        assert_eq!(Vector2f::ONE.cmp_by_length(&nan), Ordering::Less);
    }

    #[test]
    fn vector2f_cmp_by_dist() {
        let origin = Vector2f::new(10.0, 10.0);
        let near = Vector2f::new(11.0, 10.0);
        let far = Vector2f::ZERO;
        assert_eq!(near.cmp_by_dist(&far, origin), Ordering::Less);
        assert_eq!(far.cmp_by_dist(&near, origin), Ordering::Greater);
        assert_eq!(
            Vector2f::new(f32::NAN, 0.0).cmp_by_dist(&near, origin),
            Ordering::Greater
        );
    }

    // ==================== Vector3f ====================

    #[test]
    fn vector3f_constructors() {
        assert_eq!(Vector3f::splat(2.0), Vector3f::new(2.0, 2.0, 2.0));
        assert_eq!(
            Vector3f::from_xy(Vector2f::new(1.0, 2.0), 3.0),
            Vector3f::new(1.0, 2.0, 3.0)
        );
        assert_eq!(Vector3f::default(), Vector3f::ZERO);
        assert_eq!(Vector3f::AXIS_Z, Vector3f::new(0.0, 0.0, 1.0));
        let v: Vector3f = [1.0, 2.0, 3.0].into();
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vector3f_arithmetic() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3f::splat(3.0));
        assert_eq!(a * 2.0, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3f::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3f::new(-1.0, -2.0, -3.0));
        assert_eq!(-&a, Vector3f::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector3f::new(2.0, 2.5, 3.0));

        let sum: Vector3f = [a, b].into_iter().sum();
        assert_eq!(sum, Vector3f::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn vector3f_length_family() {
        let v = Vector3f::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_sqr(), 49.0);
        assert_eq!(v.length(), 7.0);
        assert_close(v.normalized().length(), 1.0);
        assert_eq!(Vector3f::new(0.0, 0.0, -3.0).normalized(), -Vector3f::AXIS_Z);
        assert_eq!(Vector3f::ZERO.normalized(), Vector3f::ZERO);
        assert!(Vector3f::ZERO.normalized_unsafe().is_nan());
        assert_eq!(v.limited(3.5), Vector3f::new(1.0, 1.5, 3.0));
        assert_eq!(v.limited(7.0), v);
        assert!(Vector3f::ZERO.limited(-1.0).is_nan());
        assert!(v.limited(3.5).almost_eq(v.normalized() * 3.5));
    }

    #[test]
    fn vector3f_zero_trait_and_display() {
        assert!(Vector3f::zero().is_zero());
        assert!(!Vector3f::AXIS_Y.is_zero());
        assert_eq!(format!("{}", Vector3f::new(1.0, 2.5, -3.0)), "vec(1, 2.5, -3)");
        assert_eq!(
            format!("{:.1}", Vector3f::new(1.0, 2.3, -3.0)),
            "vec(1.0, 2.3, -3.0)"
        );
    }
}
