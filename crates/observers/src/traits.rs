//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so the
//! observers in this crate (and your own) work with any solver that provides
//! them.
//!
//! # Event traits
//!
//! - [`HasIndex`] — events numbered by evaluation
//! - [`HasPosition`] — events that carry the evaluated position
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use amoeba_core::Observer;
//! use amoeba_observers::traits::{CanAssumeWorse, HasObjective};
//!
//! /// Rejects any evaluation above a ceiling.
//! struct Ceiling(f64);
//!
//! impl<E: HasObjective, A: CanAssumeWorse> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() > self.0).then(A::assume_worse)
//!     }
//! }
//! ```

use amoeba_core::{Model, OptimizationProblem};

use amoeba_solvers::optimization::nelder_mead;

/// An event numbered by evaluation.
pub trait HasIndex {
    /// Returns the 0-based evaluation index.
    fn index(&self) -> usize;
}

/// An event that carries the position being evaluated.
pub trait HasPosition<const N: usize> {
    /// Returns the evaluated (or attempted) position.
    fn position(&self) -> &[f64; N];
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the others.
    fn assume_worse() -> Self;
}

// --- Event traits for nelder_mead::Event ---

impl<M, P, const N: usize> HasIndex for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn index(&self) -> usize {
        nelder_mead::Event::index(self)
    }
}

impl<M, P, const N: usize> HasPosition<N> for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn position(&self) -> &[f64; N] {
        self.x()
    }
}

impl<M, P, const N: usize> HasObjective for nelder_mead::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        nelder_mead::Event::objective(self)
    }
}

// --- CanAssumeWorse for nelder_mead::Action ---

impl CanAssumeWorse for nelder_mead::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
