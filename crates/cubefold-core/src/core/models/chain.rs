use super::error::ModelError;
use super::lattice::Lattice;
use super::residue::Residue;
use super::trajectory::PositionRecord;
use crate::core::properties::table::ResiduePropertyTable;
use crate::core::utils::geometry::Site;
use serde::{Deserialize, Serialize};

/// A peptide chain on the cubic lattice.
///
/// The chain owns its [`Lattice`]; every change of a residue site goes through the chain so
/// that residue positions and lattice occupancy stay a bijection whenever the chain is
/// observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    residues: Vec<Residue>,
    lattice: Lattice,
}

impl Chain {
    /// Builds the chain in the initial zig-zag strip: residue `i` sits at `(i, i mod 2, 0)`.
    ///
    /// Consecutive residues of the strip are diagonal neighbours in the xy-plane; end and corner
    /// moves bring them onto shared faces as the run proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySequence`] for an empty sequence and
    /// [`ModelError::UnknownResidue`] for the first symbol missing from `table`.
    pub fn initialize_linear(sequence: &str, table: &ResiduePropertyTable) -> Result<Self, ModelError> {
        if sequence.is_empty() {
            return Err(ModelError::EmptySequence);
        }

        let mut lattice = Lattice::new();
        let mut residues = Vec::with_capacity(sequence.len());
        for (index, symbol) in sequence.chars().enumerate() {
            let properties = *table.get(symbol).ok_or(ModelError::UnknownResidue {
                symbol,
                position: index,
            })?;
            let site = Site::new(index as i32, (index % 2) as i32, 0);
            lattice.add(site, index)?;
            residues.push(Residue::new(index, symbol, properties, site));
        }

        Ok(Self { residues, lattice })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(index)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The residue occupying `site`, if any.
    #[inline]
    pub fn residue_at(&self, site: &Site) -> Option<&Residue> {
        self.lattice
            .occupant(site)
            .and_then(|index| self.residues.get(index))
    }

    pub fn sequence(&self) -> String {
        self.residues.iter().map(Residue::symbol).collect()
    }

    pub fn positions(&self) -> Vec<Site> {
        self.residues.iter().map(Residue::position).collect()
    }

    pub fn position_records(&self) -> Vec<PositionRecord> {
        self.residues
            .iter()
            .map(|r| PositionRecord::new(r.index(), r.position()))
            .collect()
    }

    /// Moves a group of residues in one step.
    ///
    /// All current registrations of the affected residues are released before any new one is
    /// made, so a group may move into sites it vacates itself (as pivot and crankshaft moves
    /// do).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OccupancyConflict`] if a target site is held by a residue outside
    /// the group, or if two placements target the same site. The chain is then left partially
    /// updated and must be discarded.
    pub(crate) fn reposition(&mut self, placements: &[(usize, Site)]) -> Result<(), ModelError> {
        let len = self.residues.len();
        for &(index, _) in placements {
            let residue = self
                .residues
                .get(index)
                .ok_or(ModelError::IndexOutOfRange { index, len })?;
            self.lattice.remove(&residue.position);
        }
        for &(index, site) in placements {
            self.residues[index].position = site;
            self.lattice.add(site, index)?;
        }
        Ok(())
    }

    /// Checks that occupied sites and residue sites are the same set with matching indices.
    pub fn is_consistent(&self) -> bool {
        self.lattice.len() == self.residues.len()
            && self
                .residues
                .iter()
                .all(|r| self.lattice.occupant(&r.position) == Some(r.index()))
    }

    /// Immutable record of the current conformation for persistence and analysis.
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot {
            sequence: self.sequence(),
            residues: self
                .residues
                .iter()
                .map(|r| ResidueRecord {
                    index: r.index(),
                    symbol: r.symbol(),
                    x: r.position.x,
                    y: r.position.y,
                    z: r.position.z,
                    hydrophobicity: r.hydrophobicity(),
                    charge: r.charge(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub sequence: String,
    pub residues: Vec<ResidueRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueRecord {
    pub index: usize,
    #[serde(rename = "aa")]
    pub symbol: char,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(rename = "H")]
    pub hydrophobicity: f64,
    #[serde(rename = "Q")]
    pub charge: i32,
}

impl ResidueRecord {
    pub fn site(&self) -> Site {
        Site::new(self.x, self.y, self.z)
    }
}

impl ChainSnapshot {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn sites(&self) -> Vec<Site> {
        self.residues.iter().map(ResidueRecord::site).collect()
    }
}
