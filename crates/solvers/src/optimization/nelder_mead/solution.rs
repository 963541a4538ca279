use amoeba_core::Snapshot;

use super::Point;

/// The result of a Nelder-Mead run.
///
/// Objective values are on the caller's scale, so a maximization reports the
/// maximum it found, not its negation.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Best position found.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    ///
    /// `None` when the best vertex never produced a usable model call, which
    /// happens when every vertex is infeasible or rejected by the observer.
    pub snapshot: Option<Snapshot<I, O>>,

    /// Final simplex, best first.
    pub simplex: Vec<Point<N>>,

    /// Iterations performed in this run.
    pub iters: usize,

    /// Evaluations performed by the optimizer so far, across all runs.
    pub evals: usize,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Returns the best point.
    #[must_use]
    pub fn best(&self) -> Point<N> {
        Point::new(self.x, self.objective)
    }

    /// Returns true if the best point is feasible.
    ///
    /// A run that never found a point inside the bounds still succeeds, but
    /// its best point carries an infinite objective.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.objective.is_finite()
    }
}
