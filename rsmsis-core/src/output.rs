//! Model output

use crate::constants::{
    AMU_GRAMS, BOLTZMANN, G_CM3_TO_KG_M3, PASCAL_PER_MILLIBAR, PER_CM3_TO_PER_M3, SPECIES_MASS,
};
use serde::{Deserialize, Serialize};

/// Output density slots, in positional order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Helium = 0,
    AtomicOxygen = 1,
    MolecularNitrogen = 2,
    MolecularOxygen = 3,
    Argon = 4,
    /// Total mass density rather than a number density
    MassDensity = 5,
    AtomicHydrogen = 6,
    AtomicNitrogen = 7,
    /// Hot oxygen component, significant above 500 km
    AnomalousOxygen = 8,
}

impl Species {
    /// Number-density slots, in positional order
    pub const NUMBER_DENSITIES: [Species; 8] = [
        Species::Helium,
        Species::AtomicOxygen,
        Species::MolecularNitrogen,
        Species::MolecularOxygen,
        Species::Argon,
        Species::AtomicHydrogen,
        Species::AtomicNitrogen,
        Species::AnomalousOxygen,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Molecular mass (amu). Zero for [`Species::MassDensity`].
    pub fn mass(self) -> f64 {
        SPECIES_MASS[self.index()]
    }
}

/// Densities and temperatures returned by the model.
///
/// Number densities are in m⁻³, mass density in kg/m³ and temperatures in K.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MsisOutput {
    /// Densities, indexed by [`Species`]
    pub d: [f64; 9],
    /// Exospheric temperature, then temperature at altitude
    pub t: [f64; 2],
}

impl MsisOutput {
    /// Convert an output held in model units (cm⁻³, g/cm³) to SI.
    pub fn from_model_units(d: [f64; 9], t: [f64; 2]) -> Self {
        let mut out = Self { d, t };
        for (i, value) in out.d.iter_mut().enumerate() {
            if i == Species::MassDensity.index() {
                *value *= G_CM3_TO_KG_M3;
            } else {
                *value *= PER_CM3_TO_PER_M3;
            }
        }
        out
    }

    pub fn density(&self, species: Species) -> f64 {
        self.d[species.index()]
    }

    pub fn mass_density(&self) -> f64 {
        self.density(Species::MassDensity)
    }

    pub fn exospheric_temperature(&self) -> f64 {
        self.t[0]
    }

    pub fn temperature(&self) -> f64 {
        self.t[1]
    }

    /// Total number density (m⁻³), excluding anomalous oxygen
    pub fn total_number_density(&self) -> f64 {
        Species::NUMBER_DENSITIES
            .iter()
            .filter(|s| **s != Species::AnomalousOxygen)
            .map(|s| self.density(*s))
            .sum()
    }

    /// Ideal-gas pressure (Pa)
    pub fn pressure(&self) -> f64 {
        self.total_number_density() * BOLTZMANN * self.temperature()
    }

    pub fn pressure_millibar(&self) -> f64 {
        self.pressure() / PASCAL_PER_MILLIBAR
    }

    /// Mean molecular mass (amu) implied by mass and number density.
    ///
    /// Returns `None` when the number density is zero.
    pub fn mean_molecular_mass(&self) -> Option<f64> {
        let n = self.total_number_density();
        if n > 0.0 {
            // kg/m³ to g/m³, then divide by grams per amu
            Some(self.mass_density() * 1.0E3 / AMU_GRAMS / n)
        } else {
            None
        }
    }
}
