//! Numerical solvers for the Amoeba framework.
//!
//! Solvers are grouped by problem kind. Each solver is a module exposing its
//! own configuration, events, actions, errors, and solution types.
//!
//! - [`optimization`] — minimizing or maximizing a scalar objective

pub mod optimization;
