use amoeba_core::{Model, Observer, OptimizationProblem};
use log::debug;

use super::{
    Action, Coefficients, Config, Error, Event, Step, evaluator::Evaluator, simplex::Simplex,
};

/// Core Nelder-Mead loop.
///
/// Evaluates the starting vertices, then runs exactly `config.max_iters()`
/// iterations. The returned simplex is sorted, best first.
pub(super) fn search<M, P, Obs, const N: usize>(
    evaluator: &mut Evaluator<'_, M, P, Obs, N>,
    start: &[[f64; N]],
    config: &Config,
) -> Result<Simplex<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let vertices = start
        .iter()
        .map(|&x| evaluator.evaluate(x, Step::Init))
        .collect::<Result<Vec<_>, _>>()?;
    let mut simplex = Simplex::new(vertices);

    for iter in 1..=config.max_iters() {
        let step = iterate(&mut simplex, evaluator, config.coefficients())?;
        simplex.sort();
        debug!(
            "iter {iter}: {step}, best objective {}",
            evaluator.direction().apply(simplex.best().score())
        );
    }

    Ok(simplex)
}

/// Performs one iteration on a sorted simplex.
///
/// All comparisons use the order the simplex had on entry. Returns the move
/// that was accepted into the simplex.
fn iterate<M, P, Obs, const N: usize>(
    simplex: &mut Simplex<M::Input, M::Output, N>,
    evaluator: &mut Evaluator<'_, M, P, Obs, N>,
    coefficients: &Coefficients,
) -> Result<Step, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let centroid = simplex.centroid();
    let reflected = evaluator.evaluate(
        simplex.project(&centroid, coefficients.reflect),
        Step::Reflect,
    )?;

    if reflected.score() < simplex.best().score() {
        let expanded = evaluator.evaluate(
            simplex.project(&centroid, coefficients.expand),
            Step::Expand,
        )?;
        if expanded.score() < reflected.score() {
            simplex.replace_worst(expanded);
            return Ok(Step::Expand);
        }
        simplex.replace_worst(reflected);
        return Ok(Step::Reflect);
    }

    if reflected.score() > simplex.second_worst().score() {
        let worst = simplex.worst().score();

        if reflected.score() <= worst {
            let contracted = evaluator.evaluate(
                simplex.project(&centroid, coefficients.outside_contraction),
                Step::OutsideContraction,
            )?;
            if contracted.score() < reflected.score() {
                simplex.replace_worst(contracted);
                return Ok(Step::OutsideContraction);
            }
            simplex.replace_worst(reflected);
        } else {
            let contracted = evaluator.evaluate(
                simplex.project(&centroid, coefficients.inside_contraction),
                Step::InsideContraction,
            )?;
            if contracted.score() < worst {
                simplex.replace_worst(contracted);
                return Ok(Step::InsideContraction);
            }
        }

        shrink(simplex, evaluator, coefficients.shrink)?;
        return Ok(Step::Shrink);
    }

    simplex.replace_worst(reflected);
    Ok(Step::Reflect)
}

/// Pulls every vertex except the best toward the best.
fn shrink<M, P, Obs, const N: usize>(
    simplex: &mut Simplex<M::Input, M::Output, N>,
    evaluator: &mut Evaluator<'_, M, P, Obs, N>,
    coef: f64,
) -> Result<(), Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    for index in 1..simplex.len() {
        let vertex = evaluator.evaluate(simplex.shrink_toward_best(index, coef), Step::Shrink)?;
        simplex.replace(index, vertex);
    }
    Ok(())
}
