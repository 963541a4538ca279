use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// Adapter that turns a plain objective closure into a model and a problem.
///
/// The wrapped closure receives the solver variables and returns the
/// objective. As a [`Model`] its input is `[f64; N]` and its output is the
/// objective value; as an [`OptimizationProblem`] it passes `x` straight
/// through and reports the model output as the objective.
///
/// ```
/// use amoeba_core::{Model, ObjectiveFn, OptimizationProblem};
///
/// let sphere = ObjectiveFn::new(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1]);
///
/// let input = sphere.input(&[3.0, 4.0]).unwrap();
/// let output = sphere.call(&input).unwrap();
/// assert_eq!(sphere.objective(&input, &output).unwrap(), 25.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveFn<F, const N: usize>(F);

impl<F, const N: usize> ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps an objective closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F, const N: usize> Model for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.0)(input))
    }
}

impl<F, const N: usize> OptimizationProblem<N> for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
