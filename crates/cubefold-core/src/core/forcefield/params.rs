use serde::{Deserialize, Serialize};

pub const DEFAULT_ALPHA: f64 = 0.2;
pub const DEFAULT_EPS_HH: f64 = 1.0;
pub const DEFAULT_EPS_HP: f64 = 0.3;
pub const DEFAULT_EPS_PP: f64 = 0.1;
pub const DEFAULT_EPS_Q: f64 = 1.0;

/// Parameters of the contact and solvent-exposure energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyParams {
    /// Scale of the solvent-exposure cost of hydrophobic residues.
    pub alpha: f64,
    /// Bonus for a hydrophobic/hydrophobic contact.
    pub eps_hh: f64,
    /// Penalty for a hydrophobic/polar contact.
    pub eps_hp: f64,
    /// Bonus for a polar/polar contact.
    pub eps_pp: f64,
    /// Magnitude of the charge/charge interaction.
    pub eps_q: f64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            eps_hh: DEFAULT_EPS_HH,
            eps_hp: DEFAULT_EPS_HP,
            eps_pp: DEFAULT_EPS_PP,
            eps_q: DEFAULT_EPS_Q,
        }
    }
}

impl EnergyParams {
    /// Named parameters, in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("alpha", self.alpha),
            ("eps_hh", self.eps_hh),
            ("eps_hp", self.eps_hp),
            ("eps_pp", self.eps_pp),
            ("eps_q", self.eps_q),
        ]
    }
}
