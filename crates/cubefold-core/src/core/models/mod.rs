//! # Core Models Module
//!
//! Data structures that describe a lattice peptide and the record of its folding run.
//!
//! ## Key Components
//!
//! - [`lattice`] - Occupancy index over integer 3D sites
//! - [`residue`] - A single sequence position bound to a lattice site
//! - [`chain`] - The ordered residue chain together with its lattice, and immutable snapshots
//! - [`trajectory`] - Per-step records produced by the annealing driver
//! - [`error`] - Model-level failures (occupancy conflicts, unknown residues)
//!
//! ## Usage
//!
//! ```ignore
//! use cubefold::core::models::chain::Chain;
//! use cubefold::core::properties::table::ResiduePropertyTable;
//!
//! let table = ResiduePropertyTable::hpq();
//! let chain = Chain::initialize_linear("HHPPHH", &table)?;
//! assert_eq!(chain.len(), 6);
//! ```

pub mod chain;
pub mod error;
pub mod lattice;
pub mod residue;
pub mod trajectory;
