//! # Residue Properties Module
//!
//! Maps single-character residue symbols to the hydrophobicity and charge used by the energy
//! model. A built-in HP(Q) alphabet is always available; richer tables (for example the
//! 20 standard amino acids shipped under `data/`) are loaded from TOML.

pub mod table;
