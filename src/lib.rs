//! Single-precision 2D/3D vectors and scalar math helpers.
//!
//! All operations are total over `f32`: degenerate inputs produce a zero vector or a `NaN`
//! vector rather than an error. Most callers want [`core::prelude`].

pub mod core;
pub mod util;

pub use util::linalg::{Vector2f, Vector3f};
pub use util::math;
