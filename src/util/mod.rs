pub mod linalg;
pub mod log;
pub mod math;

pub mod gg_float {
    use crate::util::linalg::{Vector2f, Vector3f};
    use anyhow::{Result, anyhow, bail};
    use num_traits::NumCast;

    pub trait GgFloat {
        /// True if no component is infinite or `NaN`.
        fn is_finite(&self) -> bool;
    }

    impl GgFloat for f32 {
        fn is_finite(&self) -> bool {
            f32::is_finite(*self)
        }
    }

    impl GgFloat for Vector2f {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl GgFloat for Vector3f {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    /// Converts `x` into `T`, failing if it is not finite or out of range of `T`.
    /// Fractional parts are truncated for integer targets.
    pub fn checked_cast<T: NumCast>(x: f32) -> Result<T> {
        if !x.is_finite() {
            bail!("{x} is not finite");
        }
        <T as NumCast>::from(x)
            .ok_or_else(|| anyhow!("{x} does not fit in range of {}", std::any::type_name::<T>()))
    }

}
