//! # Conformational Moves Module
//!
//! Describes the moves that take a lattice chain from one self-avoiding conformation to
//! another, and enumerates the legal ones for a given state.
//!
//! - **End** - the first or last residue jumps to a free face of its bonded neighbour.
//! - **Corner** - an interior residue flips to the other free site shared by both neighbours.
//! - **Pivot** - the sub-chain downstream of a pivot residue is rotated rigidly by a quarter turn.
//! - **Crankshaft** - two interior residues whose outer neighbours touch rotate together.
//!
//! The [`generator`] returns the full move set; sampling from it is left to the engine.

pub mod generator;

use crate::core::utils::geometry::{Axis, Site};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    End,
    Corner,
    Pivot,
    Crankshaft,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::End,
        MoveKind::Corner,
        MoveKind::Pivot,
        MoveKind::Crankshaft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::End => "end",
            MoveKind::Corner => "corner",
            MoveKind::Pivot => "pivot",
            MoveKind::Crankshaft => "crankshaft",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A proposed conformational change.
///
/// A move is only meaningful for the chain state it was generated from and is applied
/// immediately after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    End {
        index: usize,
        target: Site,
    },
    Corner {
        index: usize,
        target: Site,
    },
    /// Rigid rotation of residues `pivot + 1..` about residue `pivot`.
    Pivot {
        pivot: usize,
        axis: Axis,
        targets: Vec<Site>,
    },
    /// Rotation of residues `index` and `index + 1`.
    Crankshaft {
        index: usize,
        axis: Axis,
        targets: [Site; 2],
    },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::End { .. } => MoveKind::End,
            Move::Corner { .. } => MoveKind::Corner,
            Move::Pivot { .. } => MoveKind::Pivot,
            Move::Crankshaft { .. } => MoveKind::Crankshaft,
        }
    }

    /// Indices of the residues this move displaces, in the order of [`Move::targets`].
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Move::End { index, .. } | Move::Corner { index, .. } => vec![*index],
            Move::Pivot { pivot, targets, .. } => (pivot + 1..pivot + 1 + targets.len()).collect(),
            Move::Crankshaft { index, .. } => vec![*index, index + 1],
        }
    }

    pub fn targets(&self) -> &[Site] {
        match self {
            Move::End { target, .. } | Move::Corner { target, .. } => std::slice::from_ref(target),
            Move::Pivot { targets, .. } => targets.as_slice(),
            Move::Crankshaft { targets, .. } => targets.as_slice(),
        }
    }

    /// `(residue index, new site)` pairs.
    pub fn placements(&self) -> Vec<(usize, Site)> {
        self.indices()
            .into_iter()
            .zip(self.targets().iter().copied())
            .collect()
    }
}
