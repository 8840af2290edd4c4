//! Semigroup: associative binary combination.
//!
//! A semigroup is a type equipped with a binary operation where the
//! grouping of sequential applications does not affect the result. That
//! single guarantee is what lets callers fold sequences without caring
//! whether the fold nests left or right.

/// A type with an associative binary operation.
///
/// Laws (implementer's obligation, validated by the law suites):
/// - Associativity: `a.combine(&b.combine(&c)) == a.combine(&b).combine(&c)`
///
/// `combine` must be total and deterministic for all values of the type,
/// with no side effects.
pub trait Semigroup {
    /// Combine two values associatively, producing a new value.
    fn combine(&self, other: &Self) -> Self;

    /// In-place variant of [`combine`](Self::combine).
    fn combine_assign(&mut self, other: &Self)
    where
        Self: Sized,
    {
        *self = self.combine(other);
    }
}

/// Addition. Wrapping keeps the operation total on the full domain.
impl Semigroup for u64 {
    fn combine(&self, other: &Self) -> Self {
        self.wrapping_add(*other)
    }
}

/// Concatenation.
impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.push_str(other);
        out
    }
}

/// Concatenation.
impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.extend(other.iter().cloned());
        out
    }
}

/// Lifts any semigroup into one where `None` passes through.
///
/// `None` acts as an identity here, which is what makes the matching
/// [`Monoid`](crate::Monoid) instance lawful for any inner semigroup.
impl<T: Semigroup + Clone> Semigroup for Option<T> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a.clone()),
            (None, b) => b.clone(),
        }
    }
}
