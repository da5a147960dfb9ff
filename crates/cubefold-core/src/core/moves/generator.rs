use super::Move;
use crate::core::models::chain::Chain;
use crate::core::utils::geometry::{Axis, Site, are_adjacent, rotate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_PIVOT_PROBABILITY: f64 = 0.25;
pub const DEFAULT_CRANKSHAFT_PROBABILITY: f64 = 0.5;

/// Per-step probabilities of offering the non-local move classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoveConfig {
    pub pivot_probability: f64,
    pub crankshaft_probability: f64,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            pivot_probability: DEFAULT_PIVOT_PROBABILITY,
            crankshaft_probability: DEFAULT_CRANKSHAFT_PROBABILITY,
        }
    }
}

/// Enumerates every legal move of a chain.
///
/// The generator never mutates the chain. It does consume randomness, in this order: the pivot
/// gate, one axis per pivot residue, the crankshaft gate, then one axis per crankshaft site
/// whose outer residues touch. Changing that order changes every seeded trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveGenerator {
    config: MoveConfig,
}

impl MoveGenerator {
    pub fn new(config: MoveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(&self, chain: &Chain, rng: &mut R) -> Vec<Move> {
        let mut moves = Vec::new();

        end_moves(chain, &mut moves);
        corner_moves(chain, &mut moves);

        if rng.r#gen::<f64>() < self.config.pivot_probability {
            pivot_moves(chain, rng, &mut moves);
        }
        if rng.r#gen::<f64>() < self.config.crankshaft_probability {
            crankshaft_moves(chain, rng, &mut moves);
        }

        trace!(candidates = moves.len(), "Enumerated legal moves.");
        moves
    }
}

fn end_moves(chain: &Chain, moves: &mut Vec<Move>) {
    let n = chain.len();
    if n < 2 {
        return;
    }
    let residues = chain.residues();
    let lattice = chain.lattice();

    for (index, anchor) in [(0, 1), (n - 1, n - 2)] {
        let anchor_site = residues[anchor].position();
        for site in lattice.neighbours(&anchor_site) {
            if !lattice.is_occupied(&site) {
                moves.push(Move::End {
                    index,
                    target: site,
                });
            }
        }
    }
}

fn corner_moves(chain: &Chain, moves: &mut Vec<Move>) {
    let residues = chain.residues();
    let lattice = chain.lattice();

    for index in 1..residues.len().saturating_sub(1) {
        let prev = residues[index - 1].position();
        let next = residues[index + 1].position();
        for site in lattice.neighbours(&prev) {
            if !lattice.is_occupied(&site) && are_adjacent(&site, &next) {
                moves.push(Move::Corner {
                    index,
                    target: site,
                });
            }
        }
    }
}

fn pivot_moves<R: Rng + ?Sized>(chain: &Chain, rng: &mut R, moves: &mut Vec<Move>) {
    for pivot in 1..chain.len().saturating_sub(1) {
        let axis = random_axis(rng);
        if let Some(targets) = pivot_targets(chain, pivot, axis) {
            moves.push(Move::Pivot {
                pivot,
                axis,
                targets,
            });
        }
    }
}

fn crankshaft_moves<R: Rng + ?Sized>(chain: &Chain, rng: &mut R, moves: &mut Vec<Move>) {
    let residues = chain.residues();
    for index in 1..residues.len().saturating_sub(2) {
        if !are_adjacent(&residues[index - 1].position(), &residues[index + 2].position()) {
            continue;
        }
        let axis = random_axis(rng);
        if let Some(targets) = crankshaft_targets(chain, index, axis) {
            moves.push(Move::Crankshaft {
                index,
                axis,
                targets,
            });
        }
    }
}

#[inline]
fn random_axis<R: Rng + ?Sized>(rng: &mut R) -> Axis {
    Axis::ALL[rng.gen_range(0..Axis::ALL.len())]
}

/// New sites of residues `pivot + 1..` after a quarter turn about `axis` through residue
/// `pivot`, or `None` if any of them lands on an occupied site.
///
/// The occupancy check runs along the sub-chain and stops at the first collision.
pub fn pivot_targets(chain: &Chain, pivot: usize, axis: Axis) -> Option<Vec<Site>> {
    let residues = chain.residues();
    let origin = residues.get(pivot)?.position();
    let downstream = residues.get(pivot + 1..)?;
    if downstream.is_empty() {
        return None;
    }

    let mut targets = Vec::with_capacity(downstream.len());
    let mut previous = origin;
    let mut current = origin;
    for residue in downstream {
        let bond = residue.position() - previous;
        previous = residue.position();

        current += rotate(&bond, axis);
        if chain.lattice().is_occupied(&current) {
            return None;
        }
        targets.push(current);
    }
    Some(targets)
}

/// New sites of residues `index` and `index + 1` after rotating their bonds to the fixed outer
/// residues about `axis`, or `None` if the result is disconnected or collides.
pub fn crankshaft_targets(chain: &Chain, index: usize, axis: Axis) -> Option<[Site; 2]> {
    if index == 0 {
        return None;
    }
    let residues = chain.residues();
    let a = residues.get(index - 1)?.position();
    let b = residues.get(index)?.position();
    let c = residues.get(index + 1)?.position();
    let d = residues.get(index + 2)?.position();

    if !are_adjacent(&a, &d) {
        return None;
    }

    let new_b = a + rotate(&(b - a), axis);
    let new_c = d + rotate(&(c - d), axis);

    if !are_adjacent(&new_b, &new_c) {
        return None;
    }
    let lattice = chain.lattice();
    if lattice.is_occupied(&new_b) || lattice.is_occupied(&new_c) {
        return None;
    }
    Some([new_b, new_c])
}
