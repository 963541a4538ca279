use amoeba_core::{Model, Observer, OptimizationProblem};

use crate::optimization::EvalError;

use super::{Action, Point, Step};

/// Events emitted by the Nelder-Mead solver, one per evaluation.
///
/// Every event carries the 0-based evaluation `index`, counted over the
/// optimizer's lifetime, and the [`Step`] that proposed the position.
/// Objective values are on the caller's scale (see [`Point`]).
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a feasible point.
    Evaluated {
        /// Evaluation index.
        index: usize,

        /// The move that proposed this point.
        step: Step,

        /// The evaluated point (x and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// The point violates a bound and was scored without calling the model.
    Infeasible {
        /// Evaluation index.
        index: usize,

        /// The move that proposed this point.
        step: Step,

        /// The rejected position.
        x: [f64; N],

        /// The penalty on the caller's scale (`+∞` or `−∞`).
        objective: f64,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Evaluation index.
        index: usize,

        /// The move that proposed this point.
        step: Step,

        /// The position where evaluation failed.
        x: [f64; N],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// Evaluation index.
        index: usize,

        /// The move that proposed this point.
        step: Step,

        /// The position where evaluation failed.
        x: [f64; N],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the 0-based evaluation index.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Evaluated { index, .. }
            | Self::Infeasible { index, .. }
            | Self::ModelFailed { index, .. }
            | Self::ProblemFailed { index, .. } => *index,
        }
    }

    /// Returns the move that proposed the evaluated position.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Self::Evaluated { step, .. }
            | Self::Infeasible { step, .. }
            | Self::ModelFailed { step, .. }
            | Self::ProblemFailed { step, .. } => *step,
        }
    }

    /// Returns the position that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        match self {
            Self::Evaluated { point, .. } => &point.x,
            Self::Infeasible { x, .. }
            | Self::ModelFailed { x, .. }
            | Self::ProblemFailed { x, .. } => x,
        }
    }

    /// Returns the objective on the caller's scale.
    ///
    /// Infeasible points report their infinite penalty. Failed evaluations
    /// have no objective and return `f64::NAN`.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.objective,
            Self::Infeasible { objective, .. } => *objective,
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => f64::NAN,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        index: usize,
        step: Step,
        x: [f64; N],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    index,
                    step,
                    x,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    index,
                    step,
                    x,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
