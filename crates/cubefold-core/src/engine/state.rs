use crate::core::models::chain::Chain;

/// Lowest-energy conformation observed during a run.
///
/// `chain` is an owned copy taken when the minimum was reached; the live chain keeps moving
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BestStructure {
    pub energy: f64,
    pub step: usize,
    pub chain: Chain,
}

impl BestStructure {
    /// Replaces the record with a copy of `chain` if `energy` is strictly lower.
    pub(crate) fn offer(best: &mut Option<Self>, energy: f64, step: usize, chain: &Chain) -> bool {
        let improves = best.as_ref().is_none_or(|b| energy < b.energy);
        if improves {
            *best = Some(Self {
                energy,
                step,
                chain: chain.clone(),
            });
        }
        improves
    }
}
