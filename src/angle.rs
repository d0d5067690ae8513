use super::transform2d::*;

use serde::{Serialize, Deserialize};

use std::f32;

///
/// A rotation measured in degrees
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotateDegrees(pub f32);

///
/// A rotation measured in radians
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotateRadians(pub f32);

impl Default for RotateDegrees {
    fn default() -> Self {
        RotateDegrees(0.0)
    }
}

impl Default for RotateRadians {
    fn default() -> Self {
        RotateRadians(0.0)
    }
}

impl Into<RotateRadians> for RotateDegrees {
    fn into(self) -> RotateRadians {
        let RotateDegrees(degrees) = self;
        RotateRadians((degrees / 180.0) * f32::consts::PI)
    }
}

impl Into<RotateDegrees> for RotateRadians {
    fn into(self) -> RotateDegrees {
        let RotateRadians(radians) = self;
        RotateDegrees((radians / f32::consts::PI) * 180.0)
    }
}

impl Into<Transform2D> for RotateRadians {
    fn into(self) -> Transform2D {
        let RotateRadians(radians) = self;
        Transform2D::rotate(radians)
    }
}

impl Into<Transform2D> for RotateDegrees {
    fn into(self) -> Transform2D {
        let RotateDegrees(degrees) = self;
        Transform2D::rotate_degrees(degrees)
    }
}
