//! Reusable observers for the Amoeba framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasIndex`], [`HasPosition`], [`HasObjective`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`ProgressTable`] — writes one fixed-width table row per evaluation
//! - [`LogObserver`] — forwards evaluations to the `log` facade
//! - [`Exclude`] — rejects positions matching a predicate
//!
//! [`Observer`]: amoeba_core::Observer
//! [`HasIndex`]: traits::HasIndex
//! [`HasPosition`]: traits::HasPosition
//! [`HasObjective`]: traits::HasObjective
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod exclude;
mod logging;
mod table;

pub use exclude::Exclude;
pub use logging::LogObserver;
pub use table::ProgressTable;
