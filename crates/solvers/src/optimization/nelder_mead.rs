//! Nelder-Mead simplex search for bounded multi-variable optimization.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `N + 1` vertices in the `N`-dimensional
//! search box, sorted best first. Each iteration replaces the worst vertex by
//! moving it through the centroid of the others:
//!
//! 1. **Reflect** the worst vertex through the centroid.
//! 2. If the reflection beats the best vertex, try to **expand** further and
//!    keep whichever of the two is better.
//! 3. If the reflection is no better than the second-worst vertex, **contract**
//!    (outside the simplex when the reflection is no worse than the worst
//!    vertex, inside otherwise). When the contraction does not help,
//!    **shrink** every vertex toward the best one.
//! 4. Otherwise accept the reflection.
//!
//! A run always performs exactly [`Config::max_iters`] iterations; there is no
//! tolerance-based stopping.
//!
//! # Bounds
//!
//! Positions outside the [`Params`] box are never passed to the model. They
//! are scored as the worst possible value, so the comparisons above discard
//! them naturally.
//!
//! # Direction
//!
//! Maximization is minimization of the negated objective. The sign flip
//! happens when an objective is scored and is undone in every [`Event`],
//! [`Point`], and [`Solution`] handed back to the caller.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, starting with the `N + 1`
//! initial vertices of each run:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::Infeasible`] — the point was out of bounds and was not evaluated
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//!
//! Observers can return [`Action::AssumeWorse`] to score a point as infeasible,
//! which also recovers from a failed evaluation. Without that action a failure
//! aborts the run.
//!
//! # Example
//!
//! ```
//! use amoeba_core::ObjectiveFn;
//! use amoeba_solvers::optimization::{Params, nelder_mead::{Config, Optimizer}};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let objective = ObjectiveFn::new(|x: &[f64; 2]| (x[0] - 3.0).powi(2) + (x[1] + 2.0).powi(2));
//! let params = Params::new([("x", [-10.0, 10.0]), ("y", [-10.0, 10.0])])?;
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let mut optimizer = Optimizer::new(&objective, &objective, params, &mut rng);
//! let solution = optimizer.minimize_unobserved(&Config::with_max_iters(100))?;
//!
//! assert!((solution.x[0] - 3.0).abs() < 1e-2);
//! assert!((solution.x[1] + 2.0).abs() < 1e-2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod direction;
mod error;
mod evaluator;
mod event;
mod point;
mod search;
mod simplex;
mod solution;
mod step;


pub use action::Action;
pub use config::{Coefficients, Config, ConfigError};
pub use direction::Direction;
pub use error::{Error, InitError};
pub use event::Event;
pub use point::Point;
pub use solution::Solution;
pub use step::Step;

use std::fmt;

use amoeba_core::{Model, Observer, OptimizationProblem};
use rand::Rng;

use crate::optimization::Params;

use evaluator::Evaluator;
use search::search;

/// A bounded Nelder-Mead optimizer.
///
/// The optimizer owns the simplex and the evaluation counter. Both persist
/// across runs: each run starts from the vertices the previous one ended
/// with, and event indices keep counting up.
pub struct Optimizer<'a, M, P, const N: usize> {
    model: &'a M,
    problem: &'a P,
    params: Params<N>,
    vertices: Vec<[f64; N]>,
    evals: usize,
}

impl<M, P, const N: usize> fmt::Debug for Optimizer<'_, M, P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("params", &self.params)
            .field("vertices", &self.vertices)
            .field("evals", &self.evals)
            .finish_non_exhaustive()
    }
}

impl<'a, M, P, const N: usize> Optimizer<'a, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Creates an optimizer with `N + 1` vertices drawn uniformly from the box.
    pub fn new<R: Rng + ?Sized>(
        model: &'a M,
        problem: &'a P,
        params: Params<N>,
        rng: &mut R,
    ) -> Self {
        let vertices = (0..=N).map(|_| params.sample(&mut *rng)).collect();
        Self {
            model,
            problem,
            params,
            vertices,
            evals: 0,
        }
    }

    /// Creates an optimizer from explicit starting vertices.
    ///
    /// Vertices are used as given. Any vertex outside the box is simply
    /// infeasible.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertices` does not hold exactly `N + 1` positions.
    pub fn from_vertices(
        model: &'a M,
        problem: &'a P,
        params: Params<N>,
        vertices: Vec<[f64; N]>,
    ) -> Result<Self, InitError> {
        if vertices.len() != N + 1 {
            return Err(InitError::VertexCount {
                expected: N + 1,
                actual: vertices.len(),
            });
        }
        Ok(Self {
            model,
            problem,
            params,
            vertices,
            evals: 0,
        })
    }

    /// Returns the parameters being optimized.
    #[must_use]
    pub fn params(&self) -> &Params<N> {
        &self.params
    }

    /// Returns the current simplex positions.
    ///
    /// Before the first run these are the starting vertices in construction
    /// order. After a run they are the final vertices, best first.
    #[must_use]
    pub fn vertices(&self) -> &[[f64; N]] {
        &self.vertices
    }

    /// Returns the number of evaluations performed so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Minimizes the objective.
    ///
    /// The observer receives an [`Event`] for every evaluation.
    /// See the [module docs](self) for details on events and actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails during evaluation
    /// and the observer does not return [`Action::AssumeWorse`] to recover.
    pub fn minimize<Obs>(
        &mut self,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<M::Input, M::Output, N>, Error>
    where
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        self.run(Direction::Minimize, config, observer)
    }

    /// Minimizes the objective without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails during evaluation.
    pub fn minimize_unobserved(
        &mut self,
        config: &Config,
    ) -> Result<Solution<M::Input, M::Output, N>, Error> {
        self.minimize(config, ())
    }

    /// Maximizes the objective.
    ///
    /// The observer receives an [`Event`] for every evaluation.
    /// See the [module docs](self) for details on events and actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails during evaluation
    /// and the observer does not return [`Action::AssumeWorse`] to recover.
    pub fn maximize<Obs>(
        &mut self,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<M::Input, M::Output, N>, Error>
    where
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        self.run(Direction::Maximize, config, observer)
    }

    /// Maximizes the objective without observer support.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails during evaluation.
    pub fn maximize_unobserved(
        &mut self,
        config: &Config,
    ) -> Result<Solution<M::Input, M::Output, N>, Error> {
        self.maximize(config, ())
    }

    /// Runs in either direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails during evaluation
    /// and the observer does not return [`Action::AssumeWorse`] to recover.
    pub fn run<Obs>(
        &mut self,
        direction: Direction,
        config: &Config,
        mut observer: Obs,
    ) -> Result<Solution<M::Input, M::Output, N>, Error>
    where
        Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
    {
        let mut evaluator = Evaluator::new(
            self.model,
            self.problem,
            &self.params,
            direction,
            &mut self.evals,
            &mut observer,
        );
        let simplex = search(&mut evaluator, &self.vertices, config)?;

        self.vertices = simplex.positions();
        Ok(simplex.into_solution(direction, config.max_iters(), self.evals))
    }
}
