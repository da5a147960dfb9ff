use crate::core::utils::geometry::Site;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error(
        "Lattice site {site} is already occupied by residue {occupant}, cannot register residue {incoming}"
    )]
    OccupancyConflict {
        site: Site,
        occupant: usize,
        incoming: usize,
    },

    #[error("Unknown residue symbol '{symbol}' at sequence position {position}")]
    UnknownResidue { symbol: char, position: usize },

    #[error("Cannot build a chain from an empty sequence")]
    EmptySequence,

    #[error("Residue index {index} is out of range for a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
