use super::transform2d::*;

use itertools::*;

///
/// Possible error from applying a transformation to a buffer of points
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// A flat coordinate buffer had an odd number of values, so it can't be read as (x, y) pairs
    OddCoordinateCount(usize)
}

impl Transform2D {
    ///
    /// Transforms a flat buffer of `[x, y, x, y, ...]` coordinates in place
    ///
    /// Every `(x, y)` pair in the buffer is replaced with the transformed pair. A buffer
    /// whose length is odd is rejected before anything is written to it.
    ///
    pub fn transform_points(&self, points: &mut [f32]) -> Result<(), TransformError> {
        if points.len() % 2 != 0 {
            return Err(TransformError::OddCoordinateCount(points.len()));
        }

        for pair in points.chunks_exact_mut(2) {
            // Both coordinates are read before either result is written back
            let (x, y)  = (pair[0], pair[1]);
            let (x, y)  = self.transform_point(x, y);

            pair[0]     = x;
            pair[1]     = y;
        }

        Ok(())
    }

    ///
    /// As for `transform_points`, except the input buffer is left alone and the transformed
    /// coordinates are returned as a new buffer with the same layout
    ///
    pub fn transformed_points(&self, points: &[f32]) -> Result<Vec<f32>, TransformError> {
        if points.len() % 2 != 0 {
            return Err(TransformError::OddCoordinateCount(points.len()));
        }

        let mut transformed = Vec::with_capacity(points.len());

        for (x, y) in points.iter().tuples() {
            let (x, y) = self.transform_point(*x, *y);

            transformed.push(x);
            transformed.push(y);
        }

        Ok(transformed)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transform_points_in_place() {
        let translate   = Transform2D::translate(10.0, 20.0);
        let mut points  = vec![1.0, 2.0, 3.0, 4.0];

        translate.transform_points(&mut points).unwrap();

        assert!(points == vec![11.0, 22.0, 13.0, 24.0]);
    }

    #[test]
    fn odd_buffer_is_rejected() {
        let translate   = Transform2D::translate(10.0, 20.0);
        let mut points  = vec![1.0, 2.0, 3.0];

        assert!(translate.transform_points(&mut points) == Err(TransformError::OddCoordinateCount(3)));
    }

    #[test]
    fn empty_buffer_transforms_to_nothing() {
        let scale       = Transform2D::scale(2.0, 2.0);
        let mut points  = vec![];

        scale.transform_points(&mut points).unwrap();

        assert!(points.len() == 0);
    }

    #[test]
    fn transformed_points_match_in_place_results() {
        let transform       = Transform2D::rotate_degrees(30.0);
        let points          = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let transformed     = transform.transformed_points(&points).unwrap();

        let mut in_place    = points.clone();
        transform.transform_points(&mut in_place).unwrap();

        assert!(transformed == in_place);
    }
}
