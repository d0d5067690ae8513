use super::angle::*;

use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::{Mul};

///
/// Represents a 2D affine transformation matrix
///
/// Only the six free components of the matrix are stored: the bottom row is always
/// `(0, 0, 1)`, so the matrix always reads
///
/// ```text
/// [ a  c  tx ]
/// [ b  d  ty ]
/// [ 0  0  1  ]
/// ```
///
/// and a point transforms as `x' = x*a + y*c + tx`, `y' = x*b + y*d + ty`
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform2D {
    /// The x-scale component of the matrix
    pub a: f32,

    /// The y-skew component of the matrix
    pub b: f32,

    /// The x-skew component of the matrix
    pub c: f32,

    /// The y-scale component of the matrix
    pub d: f32,

    /// The x-translation component of the matrix
    pub tx: f32,

    /// The y-translation component of the matrix
    pub ty: f32
}

impl Transform2D {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D {
            a:  1.0,
            b:  0.0,
            c:  0.0,
            d:  1.0,
            tx: 0.0,
            ty: 0.0
        }
    }

    ///
    /// Creates a transform from its six components
    ///
    pub fn from_components(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Transform2D {
        Transform2D { a, b, c, d, tx, ty }
    }

    ///
    /// Creates a translation transformation
    ///
    pub fn translate(x: f32, y: f32) -> Transform2D {
        Transform2D {
            a:  1.0,
            b:  0.0,
            c:  0.0,
            d:  1.0,
            tx: x,
            ty: y
        }
    }

    ///
    /// Creates a scaling transformation
    ///
    pub fn scale(scale_x: f32, scale_y: f32) -> Transform2D {
        Transform2D {
            a:  scale_x,
            b:  0.0,
            c:  0.0,
            d:  scale_y,
            tx: 0.0,
            ty: 0.0
        }
    }

    ///
    /// Creates a rotation transformation from an angle in radians
    ///
    /// Positive angles rotate counter-clockwise when the y-axis points upwards
    ///
    pub fn rotate(radians: f32) -> Transform2D {
        let cos = f32::cos(radians);
        let sin = f32::sin(radians);

        Transform2D {
            a:  cos,
            b:  sin,
            c:  -sin,
            d:  cos,
            tx: 0.0,
            ty: 0.0
        }
    }

    ///
    /// Creates a rotation transformation from an angle in degrees
    ///
    /// Positive angles rotate counter-clockwise when the y-axis points upwards
    ///
    pub fn rotate_degrees(degrees: f32) -> Transform2D {
        let RotateRadians(radians) = RotateDegrees(degrees).into();

        Self::rotate(radians)
    }

    ///
    /// Resets this transform to the identity transform
    ///
    pub fn reset(&mut self) {
        *self = Transform2D::identity();
    }

    ///
    /// Returns this transform as a row-major 3x3 matrix, with the implicit bottom row filled in
    ///
    pub fn to_matrix(&self) -> [[f32; 3]; 3] {
        [
            [self.a,    self.c,    self.tx],
            [self.b,    self.d,    self.ty],
            [0.0,       0.0,       1.0]
        ]
    }

    ///
    /// Applies this transformation to a point, returning the transformed point
    ///
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x*self.a + y*self.c + self.tx,
            x*self.b + y*self.d + self.ty
        )
    }

    ///
    /// Composes this transform with another one so that `other` applies to points after
    /// the existing transform
    ///
    pub fn post_concat(&mut self, other: Transform2D) {
        self.post_concat_components(other.a, other.b, other.c, other.d, other.tx, other.ty);
    }

    ///
    /// Composes this transform with another one so that `other` applies to points before
    /// the existing transform
    ///
    pub fn pre_concat(&mut self, other: Transform2D) {
        self.pre_concat_components(other.a, other.b, other.c, other.d, other.tx, other.ty);
    }

    ///
    /// Translates points after the existing transform has been applied
    ///
    pub fn post_translate(&mut self, x: f32, y: f32) {
        self.post_concat_components(1.0, 0.0, 0.0, 1.0, x, y);
    }

    ///
    /// Translates points before the existing transform is applied
    ///
    pub fn pre_translate(&mut self, x: f32, y: f32) {
        self.pre_concat_components(1.0, 0.0, 0.0, 1.0, x, y);
    }

    ///
    /// Scales points after the existing transform has been applied
    ///
    pub fn post_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.post_concat_components(scale_x, 0.0, 0.0, scale_y, 0.0, 0.0);
    }

    ///
    /// Scales points before the existing transform is applied
    ///
    pub fn pre_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.pre_concat_components(scale_x, 0.0, 0.0, scale_y, 0.0, 0.0);
    }

    ///
    /// Rotates points by an angle in degrees after the existing transform has been applied
    ///
    pub fn post_rotate_degrees(&mut self, degrees: f32) {
        let RotateRadians(radians)  = RotateDegrees(degrees).into();
        let cos                     = f32::cos(radians);
        let sin                     = f32::sin(radians);

        self.post_concat_components(cos, sin, -sin, cos, 0.0, 0.0);
    }

    ///
    /// Rotates points by an angle in degrees before the existing transform is applied
    ///
    pub fn pre_rotate_degrees(&mut self, degrees: f32) {
        let RotateRadians(radians)  = RotateDegrees(degrees).into();
        let cos                     = f32::cos(radians);
        let sin                     = f32::sin(radians);

        self.pre_concat_components(cos, sin, -sin, cos, 0.0, 0.0);
    }

    ///
    /// Appends the transform with components `(a2, b2, c2, d2, tx2, ty2)` to this one
    ///
    fn post_concat_components(&mut self, a2: f32, b2: f32, c2: f32, d2: f32, tx2: f32, ty2: f32) {
        // Every new component depends on the old matrix, so read all of it before writing
        let Transform2D { a, b, c, d, tx, ty } = *self;

        self.a  = a*a2 + b*c2;
        self.b  = a*b2 + b*d2;
        self.c  = c*a2 + d*c2;
        self.d  = c*b2 + d*d2;
        self.tx = tx*a2 + ty*c2 + tx2;
        self.ty = tx*b2 + ty*d2 + ty2;
    }

    ///
    /// Prepends the transform with components `(a1, b1, c1, d1, tx1, ty1)` to this one
    ///
    fn pre_concat_components(&mut self, a1: f32, b1: f32, c1: f32, d1: f32, tx1: f32, ty1: f32) {
        // Every new component depends on the old matrix, so read all of it before writing
        let Transform2D { a, b, c, d, tx, ty } = *self;

        self.a  = a1*a + b1*c;
        self.b  = a1*b + b1*d;
        self.c  = c1*a + d1*c;
        self.d  = c1*b + d1*d;
        self.tx = tx1*a + ty1*c + tx;
        self.ty = tx1*b + ty1*d + ty;
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output=Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        // a * b applies b to points first, as when multiplying the underlying matrices
        let mut product = self;
        product.pre_concat(other);

        product
    }
}

impl Mul<&Transform2D> for &Transform2D {
    type Output=Transform2D;

    fn mul(self, other: &Transform2D) -> Transform2D {
        let mut product = *self;
        product.pre_concat(*other);

        product
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform2D {{ [{}, {}, {}] [{}, {}, {}] [0, 0, 1] }}", self.a, self.c, self.tx, self.b, self.d, self.ty)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn apply_translate() {
        let translate   = Transform2D::translate(200.0, 300.0);

        let (x, y)      = translate.transform_point(20.0, 30.0);
        assert!((x-220.0).abs() < 0.01);
        assert!((y-330.0).abs() < 0.01);
    }

    #[test]
    fn apply_scale() {
        let scale       = Transform2D::scale(2.0, 3.0);

        let (x, y)      = scale.transform_point(20.0, 30.0);
        assert!((x-40.0).abs() < 0.01);
        assert!((y-90.0).abs() < 0.01);
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let rotate      = Transform2D::rotate_degrees(90.0);

        let (x, y)      = rotate.transform_point(1.0, 0.0);
        assert!((x-0.0).abs() < 0.0001);
        assert!((y-1.0).abs() < 0.0001);
    }

    #[test]
    fn rotate_degrees_matches_rotate() {
        let degrees     = Transform2D::rotate_degrees(45.0);
        let radians     = Transform2D::rotate(std::f32::consts::PI/4.0);

        assert!((degrees.a-radians.a).abs() < 0.0001);
        assert!((degrees.b-radians.b).abs() < 0.0001);
        assert!((degrees.c-radians.c).abs() < 0.0001);
        assert!((degrees.d-radians.d).abs() < 0.0001);
    }

    #[test]
    fn reset_restores_identity() {
        let mut transform = Transform2D::scale(4.0, 5.0);
        transform.post_translate(1.0, 2.0);

        transform.reset();

        assert!(transform == Transform2D::identity());
    }

    #[test]
    fn matrix_fills_in_the_bottom_row() {
        let transform   = Transform2D::translate(7.0, 8.0);
        let matrix      = transform.to_matrix();

        assert!(matrix[0] == [1.0, 0.0, 7.0]);
        assert!(matrix[1] == [0.0, 1.0, 8.0]);
        assert!(matrix[2] == [0.0, 0.0, 1.0]);
    }

    #[test]
    fn display_shows_the_matrix_rows() {
        let transform   = Transform2D::translate(3.0, 4.0);

        assert!(format!("{}", transform) == "Transform2D { [1, 0, 3] [0, 1, 4] [0, 0, 1] }");
    }
}
