//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow takes a sequence, a residue property
//! table and a run configuration, drives the engine and hands back plain result records.
//!
//! - **Fold** ([`fold`]) - one annealing run from the extended strip to a folded structure
//! - **Batch** ([`batch`]) - several independent runs of the same sequence, optionally in
//!   parallel, with cooperative cancellation between runs

pub mod batch;
pub mod fold;
