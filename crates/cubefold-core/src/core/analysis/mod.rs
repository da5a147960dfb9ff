//! Post-run analysis of folded structures and trajectories.
//!
//! Everything here works on the records a run hands back (snapshots, positions and
//! trajectory steps) and never touches a live chain.

pub mod contacts;
pub mod statistics;
