//! Error types for reductions without an identity fallback.

use thiserror::Error;

/// Returned by [`reduce_all`](crate::reduce::reduce_all) when the input
/// sequence is empty.
///
/// A plain semigroup has no identity element to stand in for "no values",
/// so the caller must either supply at least one element or use a
/// [`Monoid`](crate::Monoid) type with [`fold_all`](crate::reduce::fold_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot reduce an empty sequence: no identity element available")]
pub struct EmptyInputError;
