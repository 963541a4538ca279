use amoeba_core::Observer;

use crate::traits::{CanAssumeWorse, HasPosition};

/// An observer that carves a region out of the search.
///
/// Every evaluation whose position matches the predicate is answered with
/// [`CanAssumeWorse::assume_worse`], so the solver treats it like an
/// out-of-bounds point. This adds constraints the box bounds cannot express.
///
/// ```
/// use amoeba_core::ObjectiveFn;
/// use amoeba_observers::Exclude;
/// use amoeba_solvers::optimization::{Params, nelder_mead::{Config, Optimizer}};
///
/// // Minimize x + y, but only inside the unit disk.
/// let objective = ObjectiveFn::new(|x: &[f64; 2]| x[0] + x[1]);
/// let params = Params::new([("x", [-1.0, 1.0]), ("y", [-1.0, 1.0])])?;
/// let outside_disk = Exclude::new(|x: &[f64; 2]| x[0].hypot(x[1]) > 1.0);
///
/// let start = vec![[0.0, 0.0], [0.5, 0.0], [0.0, 0.5]];
/// let mut optimizer = Optimizer::from_vertices(&objective, &objective, params, start)?;
/// let solution = optimizer.minimize(&Config::with_max_iters(60), outside_disk)?;
///
/// assert!(solution.x[0].hypot(solution.x[1]) <= 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exclude<F, const N: usize> {
    predicate: F,
}

impl<F, const N: usize> Exclude<F, N>
where
    F: FnMut(&[f64; N]) -> bool,
{
    /// Creates an observer rejecting every position for which `predicate`
    /// returns true.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F, E, A, const N: usize> Observer<E, A> for Exclude<F, N>
where
    F: FnMut(&[f64; N]) -> bool,
    E: HasPosition<N>,
    A: CanAssumeWorse,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.position()).then(A::assume_worse)
    }
}
