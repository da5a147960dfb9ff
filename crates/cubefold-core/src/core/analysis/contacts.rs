use crate::core::models::chain::ChainSnapshot;
use crate::core::models::trajectory::TrajectoryStep;
use crate::core::utils::geometry::{Site, are_adjacent, face_neighbours};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A non-bonded contact between residues `i < j`.
pub type Contact = (usize, usize);

/// Non-bonded lattice-adjacent residue pairs for a conformation given by residue sites.
pub fn contacts(sites: &[Site]) -> BTreeSet<Contact> {
    let by_site: HashMap<Site, usize> = sites.iter().enumerate().map(|(i, s)| (*s, i)).collect();

    let mut found = BTreeSet::new();
    for (i, site) in sites.iter().enumerate() {
        for neighbour in face_neighbours(site) {
            if let Some(&j) = by_site.get(&neighbour) {
                if j > i + 1 {
                    found.insert((i, j));
                }
            }
        }
    }
    found
}

pub fn contact_graph(snapshot: &ChainSnapshot) -> BTreeSet<Contact> {
    contacts(&snapshot.sites())
}

/// Fraction of graphs containing each contact. Contacts seen in no graph are absent.
pub fn consensus(graphs: &[BTreeSet<Contact>]) -> BTreeMap<Contact, f64> {
    let mut counts: BTreeMap<Contact, usize> = BTreeMap::new();
    for graph in graphs {
        for &contact in graph {
            *counts.entry(contact).or_insert(0) += 1;
        }
    }
    let runs = graphs.len() as f64;
    counts
        .into_iter()
        .map(|(contact, count)| (contact, count as f64 / runs))
        .collect()
}

/// Symmetric `len × len` matrix of consensus frequencies.
pub fn frequency_matrix(consensus: &BTreeMap<Contact, f64>, len: usize) -> Vec<Vec<f64>> {
    let mut matrix = vec![vec![0.0; len]; len];
    for (&(i, j), &frequency) in consensus {
        if i < len && j < len {
            matrix[i][j] = frequency;
            matrix[j][i] = frequency;
        }
    }
    matrix
}

/// Contacts of a reference ("native") structure.
pub fn native_contacts(native: &ChainSnapshot) -> BTreeSet<Contact> {
    contact_graph(native)
}

/// Fraction of `native` contacts that are formed in the conformation `sites`.
///
/// Returns `0.0` when there are no native contacts.
pub fn native_fraction(native: &BTreeSet<Contact>, sites: &[Site]) -> f64 {
    if native.is_empty() {
        return 0.0;
    }
    let formed = native
        .iter()
        .filter(|&&(i, j)| match (sites.get(i), sites.get(j)) {
            (Some(a), Some(b)) => are_adjacent(a, b),
            _ => false,
        })
        .count();
    formed as f64 / native.len() as f64
}

/// Native contact fraction after every step of a trajectory.
pub fn native_fraction_trace(native: &BTreeSet<Contact>, trajectory: &[TrajectoryStep]) -> Vec<f64> {
    trajectory
        .iter()
        .map(|step| {
            let sites: Vec<Site> = step.positions.iter().map(|p| p.site()).collect();
            native_fraction(native, &sites)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 2×2 square: 0-1-2-3 closes with a 0–3 contact.
    fn square() -> Vec<Site> {
        vec![
            Site::new(0, 0, 0),
            Site::new(0, 1, 0),
            Site::new(1, 1, 0),
            Site::new(1, 0, 0),
        ]
    }

    #[test]
    fn contacts_exclude_bonded_pairs() {
        let found = contacts(&square());
        assert_eq!(found, BTreeSet::from([(0, 3)]));
    }

    #[test]
    fn straight_line_has_no_contacts() {
        let line: Vec<Site> = (0..5).map(|i| Site::new(i, 0, 0)).collect();
        assert!(contacts(&line).is_empty());
    }

    #[test]
    fn consensus_reports_frequency_across_runs() {
        let graphs = vec![
            BTreeSet::from([(0, 3), (1, 4)]),
            BTreeSet::from([(0, 3)]),
            BTreeSet::new(),
            BTreeSet::from([(0, 3), (2, 5)]),
        ];
        let freq = consensus(&graphs);
        assert_eq!(freq[&(0, 3)], 0.75);
        assert_eq!(freq[&(1, 4)], 0.25);
        assert_eq!(freq[&(2, 5)], 0.25);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn consensus_of_no_runs_is_empty() {
        assert!(consensus(&[]).is_empty());
    }

    #[test]
    fn frequency_matrix_is_symmetric() {
        let freq = BTreeMap::from([((0, 3), 0.5), ((1, 9), 1.0)]);
        let m = frequency_matrix(&freq, 4);
        assert_eq!(m[0][3], 0.5);
        assert_eq!(m[3][0], 0.5);
        assert_eq!(m[1][2], 0.0);
    }

    #[test]
    fn native_fraction_counts_formed_contacts() {
        let native = BTreeSet::from([(0, 3), (0, 5)]);
        let mut sites = square();
        sites.push(Site::new(2, 0, 0));
        sites.push(Site::new(3, 0, 0));
        assert_eq!(native_fraction(&native, &sites), 0.5);
        assert_eq!(native_fraction(&BTreeSet::new(), &sites), 0.0);
    }

    #[test]
    fn native_fraction_treats_missing_residues_as_unformed() {
        let native = BTreeSet::from([(0, 3), (1, 8)]);
        assert_eq!(native_fraction(&native, &square()), 0.5);
    }
}
