//! Algebra Core - Associative Combination Foundation
//!
//! This crate provides the law-governed combination abstractions used to
//! aggregate values without caring how the aggregation is grouped. It
//! contains only pure mathematical abstractions with no I/O, no shared
//! state, and no application logic.
//!
//! # Capabilities
//!
//! - [`Semigroup`]: an associative binary `combine` operation
//! - [`Monoid`]: a semigroup with an identity element, `empty`
//!
//! # Derived operations
//!
//! - [`reduce_all`]: fold a non-empty sequence of any semigroup; the empty
//!   sequence is the single error case ([`EmptyInputError`])
//! - [`fold_all`]: fold any sequence of a monoid, seeding from the
//!   identity element; total
//!
//! # Laws
//!
//! Associativity and the identity laws are contracts on the implementer;
//! they cannot be checked by the compiler and are validated by the law
//! suites under `tests/`.

#![forbid(unsafe_code)]

/// Associative binary combination
pub mod semigroup;

/// Semigroups with an identity element
pub mod monoid;

/// Reduction helpers over sequences of combinable values
pub mod reduce;

/// Error types for reductions without an identity fallback
pub mod errors;

/// Additive 2D point, the canonical example instance
pub mod point;

pub use errors::EmptyInputError;
pub use monoid::Monoid;
pub use point::Point2D;
pub use reduce::{fold_all, reduce_all};
pub use semigroup::Semigroup;
