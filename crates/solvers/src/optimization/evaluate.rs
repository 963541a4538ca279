use thiserror::Error;

use amoeba_core::{Model, OptimizationProblem, Snapshot};

use super::Params;

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Whether a bounded evaluation reached the model.
#[derive(Debug, Clone)]
pub enum Feasibility<I, O, const N: usize> {
    /// `x` lies inside the bounds and was evaluated.
    Feasible(Evaluation<I, O, N>),

    /// `x` violates at least one bound; nothing was called.
    Infeasible,
}

/// Evaluates the model in the context of an optimization problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the objective from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

/// Evaluates `x` only if it lies within `params`.
///
/// Out-of-bounds points short-circuit to [`Feasibility::Infeasible`] before
/// the problem or model is touched.
///
/// # Errors
///
/// Returns an error if a feasible evaluation fails.
pub fn evaluate_within<M, P, const N: usize>(
    model: &M,
    problem: &P,
    params: &Params<N>,
    x: [f64; N],
) -> Result<
    Feasibility<M::Input, M::Output, N>,
    EvalError<M::Error, <P as OptimizationProblem<N>>::Error>,
>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    if !params.contains(&x) {
        return Ok(Feasibility::Infeasible);
    }
    evaluate(model, problem, x).map(Feasibility::Feasible)
}
