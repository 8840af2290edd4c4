//! # Point Fold Demo
//!
//! A minimal demonstration of the combination abstractions on the additive
//! point type.
//!
//! This demo shows:
//! - Combining two points with the `Semigroup` operation
//! - Folding a sequence with `fold_all`, including the empty sequence
//! - The empty-input error for identity-free reduction
//! - Verifying the laws: associativity, left/right identity
//!
//! Run with: `cargo run -p point-fold`

use algebra_core::{fold_all, reduce_all, Monoid, Point2D, Semigroup};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== Point Fold: Semigroup and Monoid Walkthrough ===");

    // === Phase 1: Pairwise combination ===
    let a = Point2D::new(1, 2);
    let b = Point2D::new(2, 3);
    let combined = a.combine(&b);
    info!(?a, ?b, ?combined, "Phase 1: pairwise combine");
    assert_eq!(combined, Point2D::new(3, 5));

    // === Phase 2: Folding a sequence ===
    let path = vec![
        Point2D::new(1, 2),
        Point2D::new(2, 3),
        Point2D::new(-3, 10),
    ];
    let total = fold_all(path.clone());
    info!(?total, steps = path.len(), "Phase 2: fold a displacement path");
    assert_eq!(total, Point2D::new(0, 15));

    // === Phase 3: The empty sequence ===
    let nothing: Point2D = fold_all(Vec::new());
    info!(?nothing, "Phase 3: folding no displacements yields the origin");
    assert_eq!(nothing, Point2D::empty());

    let failed: Result<Point2D, _> = reduce_all(Vec::new());
    match failed {
        Err(e) => info!(error = %e, "Phase 3: identity-free reduction rejects empty input"),
        Ok(_) => unreachable!("empty reduction cannot produce a value"),
    }

    // === Verify law: associativity ===
    let c = Point2D::new(7, -9);
    let grouped_left = a.combine(&b).combine(&c);
    let grouped_right = a.combine(&b.combine(&c));
    assert_eq!(grouped_left, grouped_right, "Grouping must not matter");
    info!("Law check: (a + b) + c == a + (b + c)");

    // === Verify law: identity ===
    let p = Point2D::new(5, -1);
    assert_eq!(p.combine(&Point2D::empty()), p, "Right identity violated");
    assert_eq!(Point2D::empty().combine(&p), p, "Left identity violated");
    info!("Law check: p + 0 == 0 + p == p");

    info!("=== All combination laws verified ===");
}
