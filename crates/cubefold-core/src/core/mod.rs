//! # Core Module
//!
//! Fundamental building blocks of the folding engine.
//!
//! - **Lattice Models** ([`models`]) - Occupancy index, residues, chains and trajectory records
//! - **Energy Model** ([`forcefield`]) - HP(Q) contact energies and solvent exposure
//! - **Conformational Moves** ([`moves`]) - End, corner, pivot and crankshaft move enumeration
//! - **Residue Properties** ([`properties`]) - Symbol to hydrophobicity/charge tables
//! - **Analysis** ([`analysis`]) - Contact graphs and run statistics
//! - **File I/O** ([`io`]) - Structure CSV and run log JSON persistence
//! - **Utilities** ([`utils`]) - Lattice geometry primitives

pub mod analysis;
pub mod forcefield;
pub mod io;
pub mod models;
pub mod moves;
pub mod properties;
pub mod utils;
