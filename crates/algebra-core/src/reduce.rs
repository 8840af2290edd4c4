//! Reduction helpers over sequences of combinable values.
//!
//! Both helpers fold left-to-right. Associativity guarantees the grouping
//! is immaterial, so the direction is a convention, not a semantic choice.

use crate::errors::EmptyInputError;
use crate::monoid::Monoid;
use crate::semigroup::Semigroup;

/// Reduce a non-empty sequence with [`Semigroup::combine`].
///
/// The first element seeds the fold; the empty sequence has no seed and
/// yields [`EmptyInputError`]. Retrying cannot succeed since the inputs
/// fully determine the outcome.
pub fn reduce_all<T, I>(values: I) -> Result<T, EmptyInputError>
where
    T: Semigroup,
    I: IntoIterator<Item = T>,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(EmptyInputError)?;
    Ok(iter.fold(first, |acc, next| acc.combine(&next)))
}

/// Reduce any sequence with [`Semigroup::combine`], seeding from
/// [`Monoid::empty`].
///
/// Total: the empty sequence folds to the identity element.
pub fn fold_all<T, I>(values: I) -> T
where
    T: Monoid,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .fold(T::empty(), |acc, next| acc.combine(&next))
}
