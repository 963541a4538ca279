use rand::Rng;
use thiserror::Error;

/// Errors that can occur when declaring optimization parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("parameter set is empty")]
    Empty,

    #[error("parameter `{name}` has a non-finite bound")]
    NonFinite { name: String },

    #[error("parameter `{name}` has invalid bounds: min {min} > max {max}")]
    InvalidBounds { name: String, min: f64, max: f64 },
}

/// Named solver variables and their box bounds.
///
/// Parameters keep their declaration order: the `i`th name and bounds
/// describe `x[i]` in every position a solver produces. Names are only used
/// for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<const N: usize> {
    names: Vec<String>,
    lower: [f64; N],
    upper: [f64; N],
}

impl<const N: usize> Params<N> {
    /// Creates parameters from ordered `(name, [min, max])` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if `N` is zero, a bound is non-finite, or `min > max`.
    pub fn new<S: Into<String>>(params: [(S, [f64; 2]); N]) -> Result<Self, ParamsError> {
        if N == 0 {
            return Err(ParamsError::Empty);
        }

        let mut names = Vec::with_capacity(N);
        let mut lower = [0.0; N];
        let mut upper = [0.0; N];

        for (i, (name, [min, max])) in params.into_iter().enumerate() {
            let name = name.into();
            if !min.is_finite() || !max.is_finite() {
                return Err(ParamsError::NonFinite { name });
            }
            if min > max {
                return Err(ParamsError::InvalidBounds { name, min, max });
            }
            names.push(name);
            lower[i] = min;
            upper[i] = max;
        }

        Ok(Self {
            names,
            lower,
            upper,
        })
    }

    /// Returns the parameter names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the lower bounds.
    #[must_use]
    pub fn lower(&self) -> &[f64; N] {
        &self.lower
    }

    /// Returns the upper bounds.
    #[must_use]
    pub fn upper(&self) -> &[f64; N] {
        &self.upper
    }

    /// Returns true if every coordinate of `x` lies within its bounds.
    ///
    /// Bounds are inclusive. A NaN coordinate is never contained.
    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        x.iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(xi, (lo, hi))| (*lo..=*hi).contains(xi))
    }

    /// Draws a position uniformly from the box.
    ///
    /// Each coordinate is `min + u * (max - min)` with `u` in `[0, 1)`,
    /// drawn in declaration order.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; N] {
        std::array::from_fn(|i| {
            let u: f64 = rng.random();
            self.lower[i] + u * (self.upper[i] - self.lower[i])
        })
    }
}
