//! Monoid: a semigroup with an identity element.

use crate::semigroup::Semigroup;

/// A semigroup with an identity element.
///
/// Laws (in addition to the [`Semigroup`] associativity law):
/// - Left identity: `T::empty().combine(&a) == a`
/// - Right identity: `a.combine(&T::empty()) == a`
///
/// The identity is unique when it exists; that follows from the laws and
/// is not separately enforced.
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;
}

impl Monoid for u64 {
    fn empty() -> Self {
        0
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

/// `None` is the identity for the passthrough combination, so any
/// semigroup gains a monoid by wrapping in `Option`.
impl<T: Semigroup + Clone> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}
