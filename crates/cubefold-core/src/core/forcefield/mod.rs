//! # Force Field Module
//!
//! The HP(Q) lattice energy model.
//!
//! ## Overview
//!
//! Two kinds of terms contribute to the energy of a conformation:
//!
//! - **Contact energies** between non-bonded residues on face-adjacent sites: a hydrophobic
//!   bonus, a hydrophobic/polar penalty, a polar/polar bonus and a charge/charge term, all
//!   independent and additive.
//! - **Solvent exposure** of hydrophobic residues, proportional to hydrophobicity and to the
//!   number of free neighbouring faces.
//!
//! ## Key Components
//!
//! - [`params`] - Energy parameters (α, εHH, εHP, εPP, εQ)
//! - [`potentials`] - Pure per-pair and per-residue energy functions
//! - [`term`] - Energy term aggregation
//! - [`scoring`] - Evaluation of whole chains into totals and per-residue decompositions
//!
//! ```ignore
//! use cubefold::core::forcefield::{params::EnergyParams, scoring::EnergyModel};
//!
//! let model = EnergyModel::new(EnergyParams::default());
//! let breakdown = model.evaluate(&chain);
//! println!("E = {:.3}", breakdown.total());
//! ```

pub mod params;
pub(crate) mod potentials;
pub mod scoring;
pub mod term;
