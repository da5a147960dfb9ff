use crate::core::models::chain::Chain;
use crate::core::models::error::ModelError;
use crate::core::moves::Move;
use crate::core::utils::geometry::Site;

/// A move applied to a chain that can still be undone.
///
/// Applying records the current sites of every residue the move touches; rolling back puts
/// them back through the same group placement, so occupancy is restored exactly. Dropping the
/// transaction without calling [`rollback`](Self::rollback) keeps the move.
#[derive(Debug)]
#[must_use = "a move transaction must be committed or rolled back"]
pub struct MoveTransaction {
    saved: Vec<(usize, Site)>,
}

impl MoveTransaction {
    /// # Errors
    ///
    /// Returns the [`ModelError`] raised by the chain if the move does not fit the current
    /// state. The chain is then inconsistent and the run must stop.
    pub fn apply(chain: &mut Chain, mv: &Move) -> Result<Self, ModelError> {
        let len = chain.len();
        let saved = mv
            .indices()
            .into_iter()
            .map(|index| {
                chain
                    .residue(index)
                    .map(|r| (index, r.position()))
                    .ok_or(ModelError::IndexOutOfRange { index, len })
            })
            .collect::<Result<Vec<_>, _>>()?;

        chain.reposition(&mv.placements())?;
        Ok(Self { saved })
    }

    pub fn commit(self) {}

    pub fn rollback(self, chain: &mut Chain) -> Result<(), ModelError> {
        chain.reposition(&self.saved)
    }
}
