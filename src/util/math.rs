//! Scalar helpers and free functions over [`Vector2f`] and [`Vector3f`].
//!
//! Everything here is total: no function panics or returns an error for float input.
//! Division by zero is never guarded and follows IEEE-754 (`inf`/`NaN` propagate).
//! The `*_checked` rounding variants are the exception, for callers converting into
//! integer types at a boundary.

use crate::core::config::{DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
use crate::util::gg_float;
use crate::util::linalg::{Vector2f, Vector3f};
use anyhow::Result;
use num_traits::{AsPrimitive, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Minimum, maximum and clamping using strict `<`/`>` comparisons.
///
/// Primitive numbers compare as a whole; vectors compare each component independently.
/// Because comparisons involving `NaN` are false, `min_of`/`max_of` return `other` whenever
/// either side is `NaN`, and `clamp_between` passes `NaN` through unchanged.
pub trait MinMax: Copy {
    #[must_use]
    fn min_of(self, other: Self) -> Self;
    #[must_use]
    fn max_of(self, other: Self) -> Self;
    /// Checks `min` first, then `max`. Does not require `min <= max`.
    #[must_use]
    fn clamp_between(self, min: Self, max: Self) -> Self;
}

macro_rules! impl_min_max_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinMax for $t {
                fn min_of(self, other: Self) -> Self {
                    if self < other { self } else { other }
                }
                fn max_of(self, other: Self) -> Self {
                    if self > other { self } else { other }
                }
                fn clamp_between(self, min: Self, max: Self) -> Self {
                    if self < min {
                        min
                    } else if self > max {
                        max
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_min_max_for_primitive!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl MinMax for Vector2f {
    fn min_of(self, other: Self) -> Self {
        Vector2f::new(self.x.min_of(other.x), self.y.min_of(other.y))
    }
    fn max_of(self, other: Self) -> Self {
        Vector2f::new(self.x.max_of(other.x), self.y.max_of(other.y))
    }
    fn clamp_between(self, min: Self, max: Self) -> Self {
        Vector2f::new(
            self.x.clamp_between(min.x, max.x),
            self.y.clamp_between(min.y, max.y),
        )
    }
}

impl MinMax for Vector3f {
    fn min_of(self, other: Self) -> Self {
        Vector3f::new(
            self.x.min_of(other.x),
            self.y.min_of(other.y),
            self.z.min_of(other.z),
        )
    }
    fn max_of(self, other: Self) -> Self {
        Vector3f::new(
            self.x.max_of(other.x),
            self.y.max_of(other.y),
            self.z.max_of(other.z),
        )
    }
    fn clamp_between(self, min: Self, max: Self) -> Self {
        Vector3f::new(
            self.x.clamp_between(min.x, max.x),
            self.y.clamp_between(min.y, max.y),
            self.z.clamp_between(min.z, max.z),
        )
    }
}

/// Clamps `value` between `min` and `max` so that it doesn't exceed either.
///
/// Vectors are clamped per component.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// assert_eq!(math::clamp(5.0, 0.0, 3.0), 3.0);
/// assert_eq!(
///     math::clamp(Vector2f::new(5.0, -5.0), Vector2f::ZERO, Vector2f::splat(3.0)),
///     Vector2f::new(3.0, 0.0)
/// );
/// ```
pub fn clamp<T: MinMax>(value: T, min: T, max: T) -> T {
    value.clamp_between(min, max)
}

/// Returns the smaller of the two; per component for vectors.
pub fn min<T: MinMax>(a: T, b: T) -> T {
    a.min_of(b)
}

/// Returns the bigger of the two; per component for vectors.
pub fn max<T: MinMax>(a: T, b: T) -> T {
    a.max_of(b)
}

fn from_f32<T>(value: f32) -> T
where
    T: Copy + 'static,
    f32: AsPrimitive<T>,
{
    <f32 as AsPrimitive<T>>::as_(value)
}

fn to_f32<T: AsPrimitive<f32>>(value: T) -> f32 {
    value.as_()
}

/// Rounds `value` towards +infinity, then converts with `as` semantics (integer targets
/// saturate, `NaN` becomes zero).
pub fn ceiling<T>(value: f32) -> T
where
    T: Copy + 'static,
    f32: AsPrimitive<T>,
{
    from_f32(value.ceil())
}

/// Rounds `value` towards +infinity to a multiple of `multiplier`.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// assert_eq!(math::ceiling_to::<f32>(7.0, 5.0), 10.0);
/// assert_eq!(math::ceiling_to::<i32>(-7.0, 5.0), -5);
/// ```
pub fn ceiling_to<T>(value: f32, multiplier: f32) -> T
where
    T: AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    from_f32(to_f32(ceiling::<T>(value / multiplier)) * multiplier)
}

/// Rounds `value` towards -infinity, then converts with `as` semantics.
pub fn floor<T>(value: f32) -> T
where
    T: Copy + 'static,
    f32: AsPrimitive<T>,
{
    from_f32(value.floor())
}

/// Rounds `value` towards -infinity to a multiple of `multiplier`.
pub fn floor_to<T>(value: f32, multiplier: f32) -> T
where
    T: AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    from_f32(to_f32(floor::<T>(value / multiplier)) * multiplier)
}

/// Rounds to the nearest whole number, with halfway cases away from zero, then converts
/// with `as` semantics.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// assert_eq!(math::round::<f32>(2.5), 3.0);
/// assert_eq!(math::round::<f32>(-2.5), -3.0);
/// assert_eq!(math::round::<i32>(0.49), 0);
/// ```
pub fn round<T>(value: f32) -> T
where
    T: Copy + 'static,
    f32: AsPrimitive<T>,
{
    from_f32(value.round())
}

/// Rounds to the nearest multiple of `multiplier`, with halfway cases away from zero.
pub fn round_to<T>(value: f32, multiplier: f32) -> T
where
    T: AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    from_f32(to_f32(round::<T>(value / multiplier)) * multiplier)
}

/// Like [`ceiling`], but fails instead of saturating when the result doesn't fit in `T`.
pub fn ceiling_checked<T: NumCast>(value: f32) -> Result<T> {
    gg_float::checked_cast(value.ceil())
}

/// Like [`floor`], but fails instead of saturating when the result doesn't fit in `T`.
pub fn floor_checked<T: NumCast>(value: f32) -> Result<T> {
    gg_float::checked_cast(value.floor())
}

/// Like [`round`], but fails instead of saturating when the result doesn't fit in `T`.
pub fn round_checked<T: NumCast>(value: f32) -> Result<T> {
    gg_float::checked_cast(value.round())
}

/// Linearly interpolates from `a` to `b`. `t` is not clamped, so values outside `[0, 1]`
/// extrapolate.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// assert_eq!(math::lerp(0.0_f32, 10.0, 0.5), 5.0);
/// assert_eq!(math::lerp(0.0_f32, 10.0, 1.5), 15.0);
/// assert_eq!(
///     math::lerp(Vector2f::ZERO, Vector2f::new(2.0, 4.0), 0.25),
///     Vector2f::new(0.5, 1.0)
/// );
/// ```
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    a + (b - a) * t
}

/// Maps `value` from the range `from_a..from_b` onto `to_a..to_b`.
///
/// Not guarded: `from_a == from_b` divides by zero.
pub fn remap<T>(value: T, from_a: T, from_b: T, to_a: T, to_b: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    let t = (value - from_a) / (from_b - from_a);
    t * (to_b - to_a) + to_a
}

/// Returns `-1.0` for negative values (including `-0.0`) and `1.0` otherwise, including
/// `+0.0` and `NaN`.
pub fn sign(value: f32) -> f32 {
    if value.is_sign_negative() && !value.is_nan() {
        -1.0
    } else {
        1.0
    }
}

pub fn sqr<T: Copy + Mul<Output = T>>(value: T) -> T {
    value * value
}

/// IEEE-754 square root; negative input gives `NaN`.
pub fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

/// Converts radians to degrees using the fixed factor [`DEGREES_PER_RADIAN`].
pub fn to_degrees(radians: f32) -> f32 {
    radians * DEGREES_PER_RADIAN
}

/// Converts degrees to radians using the fixed factor [`RADIANS_PER_DEGREE`].
pub fn to_radians(degrees: f32) -> f32 {
    degrees * RADIANS_PER_DEGREE
}

/// Returns the distance between two points.
pub fn distance(a: Vector2f, b: Vector2f) -> f32 {
    (b - a).length()
}

/// Returns the squared distance between two points.
pub fn distance_sqr(a: Vector2f, b: Vector2f) -> f32 {
    (b - a).length_sqr()
}

/// Divides the two vectors component-wise. Not guarded against zero components.
pub fn divide(a: Vector2f, b: Vector2f) -> Vector2f {
    Vector2f::new(a.x / b.x, a.y / b.y)
}

pub fn dot(a: Vector2f, b: Vector2f) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Multiplies the two vectors component-wise.
pub fn multiply(a: Vector2f, b: Vector2f) -> Vector2f {
    Vector2f::new(a.x * b.x, a.y * b.y)
}

/// Rotates a vector 90 degrees: `(x, y)` becomes `(y, -x)`.
///
/// With y pointing up this is a clockwise rotation.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// assert_eq!(math::perpendicular(Vector2f::new(1.0, 0.0)), Vector2f::new(0.0, -1.0));
/// assert_eq!(math::perpendicular(Vector2f::new(3.0, 2.0)), Vector2f::new(2.0, -3.0));
/// ```
pub fn perpendicular(vector: Vector2f) -> Vector2f {
    Vector2f::new(vector.y, -vector.x)
}

/// Reflects `vector` off a surface with the given `normal`.
///
/// `normal` must already be normalised; this is not checked, and a non-unit normal gives a
/// scaled (wrong but finite) result.
///
/// # Examples
/// ```
/// use vectorf::core::prelude::*;
/// let bounced = math::reflect(Vector2f::new(1.0, -1.0), Vector2f::AXIS_Y);
/// assert_eq!(bounced, Vector2f::new(1.0, 1.0));
/// ```
pub fn reflect(vector: Vector2f, normal: Vector2f) -> Vector2f {
    // -2 * (v . n) * n + v
    let dot2 = -2.0 * dot(vector, normal);
    multiply(Vector2f::splat(dot2), normal) + vector
}

pub fn distance3(a: Vector3f, b: Vector3f) -> f32 {
    (b - a).length()
}

pub fn distance3_sqr(a: Vector3f, b: Vector3f) -> f32 {
    (b - a).length_sqr()
}

pub fn divide3(a: Vector3f, b: Vector3f) -> Vector3f {
    Vector3f::new(a.x / b.x, a.y / b.y, a.z / b.z)
}

pub fn dot3(a: Vector3f, b: Vector3f) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn multiply3(a: Vector3f, b: Vector3f) -> Vector3f {
    Vector3f::new(a.x * b.x, a.y * b.y, a.z * b.z)
}

/// Right-handed cross product.
pub fn cross(a: Vector3f, b: Vector3f) -> Vector3f {
    Vector3f::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// 3D counterpart of [`reflect`]; `normal` must already be normalised.
pub fn reflect3(vector: Vector3f, normal: Vector3f) -> Vector3f {
    let dot2 = -2.0 * dot3(vector, normal);
    multiply3(Vector3f::splat(dot2), normal) + vector
}
