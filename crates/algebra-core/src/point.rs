//! Additive 2D point, the canonical example instance.

use serde::{Deserialize, Serialize};

use crate::monoid::Monoid;
use crate::semigroup::Semigroup;

/// An immutable 2D point combined by componentwise addition.
///
/// Coordinates are fixed-width `i64` and addition wraps on overflow.
/// Wrapping keeps `combine` total, and modular addition stays associative
/// with `0` as identity, so the laws hold on the full coordinate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal component
    pub x: i64,
    /// Vertical component
    pub y: i64,
}

impl Point2D {
    /// Create a point from its two components.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Componentwise addition.
impl Semigroup for Point2D {
    fn combine(&self, other: &Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }
}

/// The origin, the additive identity componentwise.
impl Monoid for Point2D {
    fn empty() -> Self {
        Self { x: 0, y: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::{fold_all, reduce_all};
    use crate::EmptyInputError;

    #[test]
    fn test_combine_adds_componentwise() {
        let combined = Point2D::new(1, 2).combine(&Point2D::new(2, 3));
        assert_eq!(combined, Point2D::new(3, 5));
    }

    #[test]
    fn test_fold_all_sums_sequence() {
        let total = fold_all(vec![Point2D::new(1, 2), Point2D::new(2, 3)]);
        assert_eq!(total, Point2D::new(3, 5));
    }

    #[test]
    fn test_fold_all_empty_yields_identity() {
        let total: Point2D = fold_all(Vec::new());
        assert_eq!(total, Point2D::new(0, 0));
    }

    #[test]
    fn test_identity_leaves_value_unchanged() {
        let p = Point2D::new(5, -1);
        assert_eq!(p.combine(&Point2D::empty()), p);
        assert_eq!(Point2D::empty().combine(&p), p);
    }

    #[test]
    fn test_reduce_all_requires_at_least_one_element() {
        let result: Result<Point2D, _> = reduce_all(Vec::new());
        assert_eq!(result, Err(EmptyInputError));
    }

    #[test]
    fn test_combine_assign_matches_combine() {
        let mut p = Point2D::new(4, 4);
        p.combine_assign(&Point2D::new(-1, 7));
        assert_eq!(p, Point2D::new(3, 11));
    }
}
