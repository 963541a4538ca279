//! Solvers for optimization problems — minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective within
//! the box described by [`Params`].
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search over a bounded box for
//!   objectives that are noisy, expensive, or non-differentiable
//!
//! [`OptimizationProblem`]: amoeba_core::OptimizationProblem

mod evaluate;
mod params;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, Feasibility, evaluate, evaluate_within};
pub use params::{Params, ParamsError};

pub mod nelder_mead;
