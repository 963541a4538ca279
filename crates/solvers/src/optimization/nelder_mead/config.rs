use thiserror::Error;

/// Step coefficients for the simplex moves.
///
/// Every move places a candidate on the line through the worst vertex and the
/// centroid of the others, at `centroid + coef * (centroid - worst)`, except
/// shrink, which pulls each vertex toward the best one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Reflection coefficient (default 1).
    pub reflect: f64,

    /// Expansion coefficient (default 2).
    pub expand: f64,

    /// Inside contraction coefficient (default −0.5).
    pub inside_contraction: f64,

    /// Outside contraction coefficient (default 0.5).
    pub outside_contraction: f64,

    /// Shrink coefficient (default 0.5).
    pub shrink: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            reflect: 1.0,
            expand: 2.0,
            inside_contraction: -0.5,
            outside_contraction: 0.5,
            shrink: 0.5,
        }
    }
}

/// Configuration for a Nelder-Mead run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    coefficients: Coefficients,
}

/// Errors that can occur when validating a Nelder-Mead config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reflect coefficient must be finite")]
    Reflect,

    #[error("expand coefficient must be finite")]
    Expand,

    #[error("inside contraction coefficient must be finite")]
    InsideContraction,

    #[error("outside contraction coefficient must be finite")]
    OutsideContraction,

    #[error("shrink coefficient must be finite")]
    Shrink,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, Coefficients::default()).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is non-finite.
    pub fn new(max_iters: usize, coefficients: Coefficients) -> Result<Self, ConfigError> {
        let Coefficients {
            reflect,
            expand,
            inside_contraction,
            outside_contraction,
            shrink,
        } = coefficients;

        if !reflect.is_finite() {
            return Err(ConfigError::Reflect);
        }
        if !expand.is_finite() {
            return Err(ConfigError::Expand);
        }
        if !inside_contraction.is_finite() {
            return Err(ConfigError::InsideContraction);
        }
        if !outside_contraction.is_finite() {
            return Err(ConfigError::OutsideContraction);
        }
        if !shrink.is_finite() {
            return Err(ConfigError::Shrink);
        }

        Ok(Self {
            max_iters,
            coefficients,
        })
    }

    /// Creates a config with default coefficients and the given iteration count.
    #[must_use]
    pub fn with_max_iters(max_iters: usize) -> Self {
        Self {
            max_iters,
            ..Self::default()
        }
    }

    /// Returns the number of iterations a run performs.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_coefficients() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 20);
        assert_eq!(config.coefficients(), &Coefficients::default());
        assert_eq!(config.coefficients().inside_contraction, -0.5);
    }

    #[test]
    fn with_max_iters_keeps_default_coefficients() {
        let config = Config::with_max_iters(100);

        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.coefficients(), &Coefficients::default());
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        let bad = |f: fn(&mut Coefficients)| {
            let mut coefficients = Coefficients::default();
            f(&mut coefficients);
            Config::new(10, coefficients)
        };

        assert_eq!(bad(|c| c.reflect = f64::NAN), Err(ConfigError::Reflect));
        assert_eq!(bad(|c| c.expand = f64::INFINITY), Err(ConfigError::Expand));
        assert_eq!(
            bad(|c| c.inside_contraction = f64::NEG_INFINITY),
            Err(ConfigError::InsideContraction)
        );
        assert_eq!(
            bad(|c| c.outside_contraction = f64::NAN),
            Err(ConfigError::OutsideContraction)
        );
        assert_eq!(bad(|c| c.shrink = f64::NAN), Err(ConfigError::Shrink));
    }

    #[test]
    fn accepts_unusual_but_finite_coefficients() {
        let coefficients = Coefficients {
            reflect: 0.8,
            expand: 3.0,
            inside_contraction: -0.25,
            outside_contraction: 0.75,
            shrink: 0.9,
        };

        let config = Config::new(0, coefficients).unwrap();
        assert_eq!(config.max_iters(), 0);
        assert_eq!(config.coefficients(), &coefficients);
    }
}
