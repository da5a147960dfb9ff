use super::params::EnergyParams;
use crate::core::properties::table::ResidueProperties;

const LATTICE_COORDINATION: usize = 6;

/// Contact energy of two non-bonded residues on adjacent sites.
#[inline]
pub fn contact(a: &ResidueProperties, b: &ResidueProperties, params: &EnergyParams) -> f64 {
    let mut energy = 0.0;

    match (a.is_hydrophobic(), b.is_hydrophobic()) {
        (true, true) => energy -= params.eps_hh,
        (true, false) | (false, true) => energy += params.eps_hp,
        (false, false) => {}
    }

    if a.is_polar() && b.is_polar() {
        energy -= params.eps_pp;
    }

    if a.is_charged() && b.is_charged() {
        if a.charge.signum() != b.charge.signum() {
            energy -= params.eps_q;
        } else {
            energy += params.eps_q;
        }
    }

    energy
}

/// Solvent-exposure cost `α·h·exposed` of a residue with `occupied_neighbours` occupied faces.
///
/// Zero for residues that are not hydrophobic.
#[inline]
pub fn solvent_exposure(
    properties: &ResidueProperties,
    occupied_neighbours: usize,
    params: &EnergyParams,
) -> f64 {
    if !properties.is_hydrophobic() {
        return 0.0;
    }
    let exposed = LATTICE_COORDINATION.saturating_sub(occupied_neighbours);
    params.alpha * properties.hydrophobicity * exposed as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    const H: ResidueProperties = ResidueProperties::new(1.0, 0);
    const P: ResidueProperties = ResidueProperties::new(-1.0, 0);
    const N: ResidueProperties = ResidueProperties::new(0.0, 0);
    const POS: ResidueProperties = ResidueProperties::new(-1.0, 1);
    const NEG: ResidueProperties = ResidueProperties::new(-1.0, -1);
    const HYDROPHOBIC_POS: ResidueProperties = ResidueProperties::new(0.5, 2);

    #[test]
    fn hydrophobic_pair_is_favourable() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&H, &H, &params), -1.0));
    }

    #[test]
    fn hydrophobic_polar_pair_is_penalised_in_both_orders() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&H, &P, &params), 0.3));
        assert!(f64_approx_equal(contact(&P, &H, &params), 0.3));
        assert!(f64_approx_equal(contact(&H, &N, &params), 0.3));
    }

    #[test]
    fn polar_pair_gets_small_bonus() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&P, &P, &params), -0.1));
    }

    #[test]
    fn neutral_pair_has_no_energy() {
        let params = EnergyParams::default();
        assert_eq!(contact(&N, &N, &params), 0.0);
        assert_eq!(contact(&N, &P, &params), 0.0);
    }

    #[test]
    fn opposite_charges_attract_on_top_of_polar_bonus() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&POS, &NEG, &params), -1.1));
    }

    #[test]
    fn like_charges_repel_on_top_of_polar_bonus() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&NEG, &NEG, &params), 0.9));
    }

    #[test]
    fn hydrophobic_bonus_and_charge_penalty_combine() {
        let params = EnergyParams::default();
        let other = ResidueProperties::new(0.8, 1);
        assert!(f64_approx_equal(contact(&HYDROPHOBIC_POS, &other, &params), -1.0 + 1.0));
    }

    #[test]
    fn charge_against_uncharged_partner_is_ignored() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(contact(&POS, &P, &params), -0.1));
    }

    #[test]
    fn disabled_polar_term_reproduces_reduced_model() {
        let params = EnergyParams {
            eps_pp: 0.0,
            ..EnergyParams::default()
        };
        assert_eq!(contact(&P, &P, &params), 0.0);
    }

    #[test]
    fn solvent_exposure_scales_with_free_faces() {
        let params = EnergyParams::default();
        assert!(f64_approx_equal(solvent_exposure(&H, 1, &params), 0.2 * 5.0));
        assert!(f64_approx_equal(solvent_exposure(&H, 6, &params), 0.0));
        let strong = ResidueProperties::new(2.0, 0);
        assert!(f64_approx_equal(solvent_exposure(&strong, 2, &params), 0.2 * 2.0 * 4.0));
    }

    #[test]
    fn solvent_exposure_ignores_non_hydrophobic_residues() {
        let params = EnergyParams::default();
        assert_eq!(solvent_exposure(&P, 0, &params), 0.0);
        assert_eq!(solvent_exposure(&N, 0, &params), 0.0);
    }
}
