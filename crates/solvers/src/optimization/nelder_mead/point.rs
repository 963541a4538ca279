use amoeba_core::Snapshot;

use super::Direction;

/// A position with its objective value, as seen by the caller.
///
/// The objective is on the caller's scale: for a maximization run it is the
/// value the objective returned, not its negation. Infeasible points report
/// `+∞` when minimizing and `−∞` when maximizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The position.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub objective: f64,
}

impl<const N: usize> Point<N> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; N], objective: f64) -> Self {
        Self { x, objective }
    }
}

/// An evaluated simplex vertex.
///
/// `score` is on the internal scale, where lower is better and `+∞` marks an
/// infeasible or rejected point. A vertex only exists once its position has
/// been evaluated, and its score is never NaN.
#[derive(Debug, Clone)]
pub(super) struct Vertex<I, O, const N: usize> {
    x: [f64; N],
    score: f64,
    snapshot: Option<Snapshot<I, O>>,
}

impl<I, O, const N: usize> Vertex<I, O, N> {
    pub(super) fn new(x: [f64; N], score: f64, snapshot: Option<Snapshot<I, O>>) -> Self {
        debug_assert!(!score.is_nan(), "vertex score must not be NaN");
        Self { x, score, snapshot }
    }

    /// A vertex scored as the worst possible point.
    pub(super) fn rejected(x: [f64; N]) -> Self {
        Self::new(x, f64::INFINITY, None)
    }

    pub(super) fn x(&self) -> &[f64; N] {
        &self.x
    }

    pub(super) fn score(&self) -> f64 {
        self.score
    }

    pub(super) fn to_point(&self, direction: Direction) -> Point<N> {
        Point::new(self.x, direction.apply(self.score))
    }

    pub(super) fn into_snapshot(self) -> Option<Snapshot<I, O>> {
        self.snapshot
    }
}
