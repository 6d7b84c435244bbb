//! Tests for point arithmetic and conversions

#[cfg(test)]
mod tests {
    use patterncard::geometry::Point;

    // Tests Euclidean distance on a 3-4-5 triangle
    // Verified by returning the squared distance
    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
    }

    // Tests component-wise addition used for path offsets
    // Verified by swapping coordinates in the Add impl
    #[test]
    fn test_add() {
        let sum = Point::new(1.5, -2.0) + Point::new(500.0, 500.0);
        assert_eq!(sum, Point::new(501.5, 498.0));
    }

    // Tests tuple conversion keeps (x, y) order
    // Verified by reversing the tuple destructuring
    #[test]
    fn test_from_tuple() {
        let point: Point = (3.0, 7.0).into();
        assert_eq!(point.x, 3.0);
        assert_eq!(point.y, 7.0);
        assert_eq!(Point::origin(), Point::default());
    }
}
