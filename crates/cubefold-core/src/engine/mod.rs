//! # Engine Module
//!
//! The stateful layer of CubeFold: it drives a single chain through a Metropolis Monte Carlo
//! run under a simulated-annealing temperature schedule.
//!
//! - **Configuration** ([`config`]) - run parameters, validation and the builder
//! - **Relax loop** ([`relax`]) - propose, score, accept or roll back, record
//! - **Transactions** ([`transaction`]) - reversible application of a move to a chain
//! - **Best structure** ([`state`]) - deep copy of the lowest-energy conformation seen
//! - **Progress Monitoring** ([`progress`]) - callbacks for front ends
//! - **Error Handling** ([`error`]) - engine-level error type

pub mod config;
pub mod error;
pub mod progress;
pub mod relax;
pub mod schedule;
pub mod state;
pub mod transaction;
pub mod utils;
