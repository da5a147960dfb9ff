//! # CubeFold Core Library
//!
//! Metropolis Monte Carlo folding of toy HP(Q) peptides on a cubic lattice, driven by a
//! simulated-annealing temperature schedule.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Lattice`, `Chain`, trajectory
//!   records), the pure contact/solvent energy model, the move generator, residue property
//!   tables, persistence and post-hoc contact analysis.
//!
//! - **[`engine`]: The Logic Core.** The stateful annealing driver. It owns the run
//!   configuration, the transactional commit/rollback of speculative moves, best-structure
//!   tracking and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of the engine: a single
//!   seeded folding run and a batch of independent runs with cooperative cancellation.

pub mod core;
pub mod engine;
pub mod workflows;
