use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during a Nelder-Mead run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

/// Errors that can occur when building an optimizer from explicit vertices.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    #[error("simplex needs {expected} vertices, got {actual}")]
    VertexCount { expected: usize, actual: usize },
}
