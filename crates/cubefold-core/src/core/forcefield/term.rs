use std::ops::{Add, AddAssign};

/// Energy split by physical origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub contact: f64,
    pub solvent: f64,
}

impl EnergyTerm {
    pub fn new(contact: f64, solvent: f64) -> Self {
        Self { contact, solvent }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.contact + self.solvent
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            contact: self.contact + rhs.contact,
            solvent: self.solvent + rhs.solvent,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.contact += rhs.contact;
        self.solvent += rhs.solvent;
    }
}
