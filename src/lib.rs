//!
//! # 2D affine transformations
//!
//! `flo_affine` describes 2D affine transformations using the six free components of a
//! 3x3 matrix whose bottom row is always `(0, 0, 1)`. The `Transform2D` type supplies
//! constructors for the primitive transformations (translations, scalings and rotations),
//! operations for composing transforms before or after one another, and operations for
//! applying a transform to individual points or to flat buffers of `(x, y)` coordinates.
//!
//! Rotations follow the usual mathematical convention: positive angles turn
//! counter-clockwise when the y-axis points upwards. Angles can be supplied in degrees or
//! in radians, with the `RotateDegrees` and `RotateRadians` types converting between the
//! two. Multiplying two transforms composes them the same way as multiplying the
//! underlying matrices, so `a * b` transforms points by `b` first and by `a` second; the
//! `pre_concat` and `post_concat` operations compose in place instead of building a new
//! value.
//!
#![warn(bare_trait_objects)]

mod angle;
mod transform2d;
mod points;

pub use self::angle::*;
pub use self::transform2d::*;
pub use self::points::*;
