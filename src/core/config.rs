pub const KINDA_LARGE_FLOAT: f32 = 9_999_999.0;
pub const KINDA_SMALL_FLOAT: f32 = 0.000_000_1;
/// Lengths at or below this normalise to the zero vector.
pub const EPSILON: f32 = KINDA_SMALL_FLOAT;
/// Tolerance used by `almost_eq()`; equality (`==`) itself is always exact.
pub const ALMOST_EQ_EPSILON: f32 = 1e-5;

#[allow(clippy::excessive_precision)]
pub const PI_TWO: f32 = 6.283_185_307_179_586_476_925_286_766_559_0;
#[allow(clippy::excessive_precision)]
pub const PI_ONE: f32 = 3.141_592_653_589_793_238_462_643_383_279_5;
#[allow(clippy::excessive_precision)]
pub const PI_HALF: f32 = 1.570_796_326_794_896_619_231_321_691_639_8;

#[allow(clippy::excessive_precision)]
pub const SQUARE_ROOT_TWO: f32 = 1.414_213_562_373_095_048_801_688_724_209_7;
#[allow(clippy::excessive_precision)]
pub const SQUARE_ROOT_THREE: f32 = 1.732_050_807_568_877;

pub const DIAGONAL_1D: f32 = 1.0;
pub const DIAGONAL_2D: f32 = SQUARE_ROOT_TWO;
pub const DIAGONAL_3D: f32 = SQUARE_ROOT_THREE;

// Approximate on purpose: outputs must stay bit-identical to existing data.
pub const DEGREES_PER_RADIAN: f32 = 57.2958;
pub const RADIANS_PER_DEGREE: f32 = 0.017_453_3;
