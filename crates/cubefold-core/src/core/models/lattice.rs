use super::error::ModelError;
use crate::core::utils::geometry::{Site, face_neighbours};
use std::collections::HashMap;

/// Occupancy index of the cubic lattice.
///
/// Each occupied site maps to the sequence index of the residue sitting on it, so the index
/// doubles as the site-to-residue lookup of the owning [`Chain`](super::chain::Chain).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    occupied: HashMap<Site, usize>,
}

impl Lattice {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_occupied(&self, site: &Site) -> bool {
        self.occupied.contains_key(site)
    }

    /// Index of the residue registered at `site`, if any.
    #[inline]
    pub fn occupant(&self, site: &Site) -> Option<usize> {
        self.occupied.get(site).copied()
    }

    /// Registers `residue_index` at `site`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OccupancyConflict`] if another registration already holds the site.
    /// The lattice is left untouched in that case.
    pub fn add(&mut self, site: Site, residue_index: usize) -> Result<(), ModelError> {
        if let Some(&occupant) = self.occupied.get(&site) {
            return Err(ModelError::OccupancyConflict {
                site,
                occupant,
                incoming: residue_index,
            });
        }
        self.occupied.insert(site, residue_index);
        Ok(())
    }

    /// Unregisters `site`. Removing a free site is a no-op.
    pub fn remove(&mut self, site: &Site) -> Option<usize> {
        self.occupied.remove(site)
    }

    pub fn neighbours(&self, site: &Site) -> [Site; 6] {
        face_neighbours(site)
    }

    pub fn occupied_neighbour_count(&self, site: &Site) -> usize {
        face_neighbours(site)
            .iter()
            .filter(|n| self.is_occupied(n))
            .count()
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Iterates occupied sites in unspecified order.
    pub fn sites(&self) -> impl Iterator<Item = (&Site, &usize)> {
        self.occupied.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lattice_is_empty() {
        let lattice = Lattice::new();
        assert!(lattice.is_empty());
        assert!(!lattice.is_occupied(&Site::origin()));
    }

    #[test]
    fn add_registers_site_and_occupant() {
        let mut lattice = Lattice::new();
        lattice.add(Site::new(1, 2, 3), 7).unwrap();
        assert!(lattice.is_occupied(&Site::new(1, 2, 3)));
        assert_eq!(lattice.occupant(&Site::new(1, 2, 3)), Some(7));
        assert_eq!(lattice.len(), 1);
    }

    #[test]
    fn add_to_occupied_site_fails_without_overwriting() {
        let mut lattice = Lattice::new();
        lattice.add(Site::origin(), 0).unwrap();
        let err = lattice.add(Site::origin(), 4).unwrap_err();
        assert_eq!(
            err,
            ModelError::OccupancyConflict {
                site: Site::origin(),
                occupant: 0,
                incoming: 4,
            }
        );
        assert_eq!(lattice.occupant(&Site::origin()), Some(0));
    }

    #[test]
    fn remove_is_noop_for_free_site() {
        let mut lattice = Lattice::new();
        assert_eq!(lattice.remove(&Site::new(5, 5, 5)), None);
        lattice.add(Site::new(5, 5, 5), 2).unwrap();
        assert_eq!(lattice.remove(&Site::new(5, 5, 5)), Some(2));
        assert!(lattice.is_empty());
    }

    #[test]
    fn occupied_neighbour_count_sees_only_face_contacts() {
        let mut lattice = Lattice::new();
        lattice.add(Site::new(1, 0, 0), 0).unwrap();
        lattice.add(Site::new(0, 0, -1), 1).unwrap();
        lattice.add(Site::new(1, 1, 0), 2).unwrap();
        assert_eq!(lattice.occupied_neighbour_count(&Site::origin()), 2);
    }

    #[test]
    fn neighbours_order_is_stable() {
        let lattice = Lattice::new();
        let site = Site::new(0, 1, 0);
        assert_eq!(lattice.neighbours(&site), lattice.neighbours(&site));
    }
}
