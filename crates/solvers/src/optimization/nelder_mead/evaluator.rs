use amoeba_core::{Model, Observer, OptimizationProblem};
use log::{trace, warn};

use crate::optimization::{Feasibility, Params, evaluate_within};

use super::{Action, Direction, Error, Event, Point, Step, point::Vertex};

/// Bounded, direction-normalized objective.
///
/// Each call to [`Evaluator::evaluate`] counts exactly one evaluation and
/// emits exactly one event, whether or not the model is reached.
pub(super) struct Evaluator<'a, M, P, Obs, const N: usize> {
    model: &'a M,
    problem: &'a P,
    params: &'a Params<N>,
    direction: Direction,
    evals: &'a mut usize,
    observer: &'a mut Obs,
}

impl<'a, M, P, Obs, const N: usize> Evaluator<'a, M, P, Obs, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'e> Observer<Event<'e, M, P, N>, Action>,
{
    pub(super) fn new(
        model: &'a M,
        problem: &'a P,
        params: &'a Params<N>,
        direction: Direction,
        evals: &'a mut usize,
        observer: &'a mut Obs,
    ) -> Self {
        Self {
            model,
            problem,
            params,
            direction,
            evals,
            observer,
        }
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    /// Scores `x` on the internal scale.
    ///
    /// Out-of-bounds points score `+∞` without touching the model. Feasible
    /// points score `direction * objective`, with NaN mapped to `+∞`.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluation fails and the observer does not
    /// answer the failure event with [`Action::AssumeWorse`].
    pub(super) fn evaluate(
        &mut self,
        x: [f64; N],
        step: Step,
    ) -> Result<Vertex<M::Input, M::Output, N>, Error> {
        let index = *self.evals;
        *self.evals += 1;

        match evaluate_within(self.model, self.problem, self.params, x) {
            Ok(Feasibility::Infeasible) => {
                trace!("eval {index} ({step}): {x:?} is out of bounds");
                let event: Event<'_, M, P, N> = Event::Infeasible {
                    index,
                    step,
                    x,
                    objective: self.direction.apply(f64::INFINITY),
                };
                // Already scored as the worst possible point.
                self.observer.observe(&event);
                Ok(Vertex::rejected(x))
            }

            Ok(Feasibility::Feasible(eval)) => {
                trace!("eval {index} ({step}): f({x:?}) = {}", eval.objective);
                let event: Event<'_, M, P, N> = Event::Evaluated {
                    index,
                    step,
                    point: Point::new(x, eval.objective),
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                };
                if let Some(Action::AssumeWorse) = self.observer.observe(&event) {
                    return Ok(Vertex::rejected(x));
                }

                let score = self.direction.apply(eval.objective);
                if score.is_nan() {
                    warn!("eval {index} ({step}): NaN objective at {x:?}, treating as infeasible");
                    return Ok(Vertex::rejected(x));
                }
                Ok(Vertex::new(x, score, Some(eval.snapshot)))
            }

            Err(error) => {
                let action =
                    Event::<M, P, N>::emit_failure(index, step, x, &error, &mut *self.observer);
                match action {
                    Some(Action::AssumeWorse) => Ok(Vertex::rejected(x)),
                    None => Err(error.into()),
                }
            }
        }
    }
}
