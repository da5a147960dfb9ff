use super::params::EnergyParams;
use super::potentials;
use super::term::EnergyTerm;
use crate::core::models::chain::Chain;
use crate::core::models::residue::Residue;
use std::collections::HashSet;

/// Energy of a conformation, both in total and decomposed per residue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyBreakdown {
    pub term: EnergyTerm,
    /// `local[i]` is the energy attributed to residue `i`: its own solvent exposure plus half of
    /// each contact it takes part in.
    pub local: Vec<f64>,
}

impl EnergyBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.term.total()
    }
}

/// Stateless evaluator of the HP(Q) lattice energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyModel {
    params: EnergyParams,
}

impl EnergyModel {
    pub fn new(params: EnergyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EnergyParams {
        &self.params
    }

    /// Contact energy of two residues, regardless of where they sit.
    #[inline]
    pub fn pair_energy(&self, a: &Residue, b: &Residue) -> f64 {
        potentials::contact(a.properties(), b.properties(), &self.params)
    }

    pub fn solvent_energy(&self, residue: &Residue, chain: &Chain) -> f64 {
        let occupied = chain
            .lattice()
            .occupied_neighbour_count(&residue.position());
        potentials::solvent_exposure(residue.properties(), occupied, &self.params)
    }

    /// Evaluates the whole chain in one pass.
    ///
    /// Each non-bonded contact is counted once, tracked through a set of seen index pairs that
    /// lives for this call only.
    pub fn evaluate(&self, chain: &Chain) -> EnergyBreakdown {
        let mut term = EnergyTerm::default();
        let mut local = vec![0.0; chain.len()];
        let mut seen_pairs: HashSet<(usize, usize)> = HashSet::new();

        for residue in chain.residues() {
            let i = residue.index();

            let solvent = self.solvent_energy(residue, chain);
            term.solvent += solvent;
            local[i] += solvent;

            for site in chain.lattice().neighbours(&residue.position()) {
                let Some(other) = chain.residue_at(&site) else {
                    continue;
                };
                if residue.is_bonded_to(other) {
                    continue;
                }
                let j = other.index();
                if !seen_pairs.insert((i.min(j), i.max(j))) {
                    continue;
                }

                let energy = self.pair_energy(residue, other);
                term.contact += energy;
                local[i] += energy / 2.0;
                local[j] += energy / 2.0;
            }
        }

        EnergyBreakdown { term, local }
    }

    pub fn total_energy(&self, chain: &Chain) -> f64 {
        self.evaluate(chain).total()
    }

    pub fn local_energies(&self, chain: &Chain) -> Vec<f64> {
        self.evaluate(chain).local
    }
}
