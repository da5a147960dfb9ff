use crate::core::properties::table::ResidueProperties;
use crate::core::utils::geometry::Site;

/// One sequence position of the peptide, bound to a lattice site.
///
/// The chemical attributes are resolved once from the residue property table when the chain is
/// built and never change afterwards; only the site moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    index: usize,
    symbol: char,
    properties: ResidueProperties,
    pub(crate) position: Site,
}

impl Residue {
    pub(crate) fn new(index: usize, symbol: char, properties: ResidueProperties, position: Site) -> Self {
        Self {
            index,
            symbol,
            properties,
            position,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn properties(&self) -> &ResidueProperties {
        &self.properties
    }

    #[inline]
    pub fn hydrophobicity(&self) -> f64 {
        self.properties.hydrophobicity
    }

    #[inline]
    pub fn charge(&self) -> i32 {
        self.properties.charge
    }

    #[inline]
    pub fn position(&self) -> Site {
        self.position
    }

    #[inline]
    pub fn is_hydrophobic(&self) -> bool {
        self.properties.is_hydrophobic()
    }

    /// Sequence neighbours (|i - j| <= 1) never form contacts.
    #[inline]
    pub fn is_bonded_to(&self, other: &Residue) -> bool {
        self.index.abs_diff(other.index) <= 1
    }
}
