//! Lower-atmosphere model
//!
//! Below 72.5 km the atmosphere is treated as well mixed. Temperature is a
//! spline of node temperatures at 72.5, 55, 45 and 32.5 km (mesosphere and
//! upper stratosphere) and at 32.5, 20, 15, 10 and 0 km (lower stratosphere
//! and troposphere). N2 is integrated hydrostatically down from the mixed
//! N2 density of the thermosphere at 72.5 km; He, O2 and Ar follow at fixed
//! mixing ratios. Between 62.5 and 72.5 km every species blends linearly
//! toward its thermosphere value so the two regimes join continuously.

use crate::harmonics::HarmonicBasis;
use crate::profile::{densm, Gravity, TemperatureNodes};
use crate::thermosphere::Thermosphere;
use rsmsis_core::coefficients::{PAVGM, PDM, PMA};
use rsmsis_core::constants::{AMU_GRAMS, MIXING_FLOOR_KM, THERMOSPHERE_FLOOR_KM};
use rsmsis_core::output::Species;
use rsmsis_core::switches::{Effect, Switches};

/// Densities (cm⁻³, g/cm³) and temperature (K) below the thermosphere
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LowerAtmosphere {
    pub densities: [f64; 9],
    pub temperature: f64,
}

impl LowerAtmosphere {
    /// Evaluate at `alt` km, below 72.5 km, continuing from the thermosphere
    /// solution at 72.5 km.
    pub fn calculate(
        basis: &HarmonicBasis,
        switches: &Switches,
        gravity: &Gravity,
        alt: f64,
        thermosphere: &Thermosphere,
    ) -> Self {
        let (upper, lower) = node_profiles(basis, switches, thermosphere);
        let xmm = PDM[2][4];

        // Fraction of the thermosphere departure kept at this altitude
        let dmc = if alt > MIXING_FLOOR_KM {
            1.0 - (THERMOSPHERE_FLOOR_KM - alt) / (THERMOSPHERE_FLOOR_KM - MIXING_FLOOR_KM)
        } else {
            0.0
        };

        let top = &thermosphere.densities;
        let dz28 = top[2];
        let mut d = [0.0; 9];

        let dmr = top[2] / thermosphere.mixed_n2 - 1.0;
        let (n2, temperature) = densm(gravity, alt, thermosphere.mixed_n2, xmm, &upper, &lower);
        d[2] = n2 * (1.0 + dmr * dmc);

        // He, O2 and Ar at their mixing ratios to N2
        for (species, row) in [
            (Species::Helium, 0),
            (Species::MolecularOxygen, 3),
            (Species::Argon, 4),
        ] {
            let i = species.index();
            let ratio = PDM[row][1];
            let dmr = top[i] / (dz28 * ratio) - 1.0;
            d[i] = d[2] * ratio * (1.0 + dmr * dmc);
        }

        d[5] = AMU_GRAMS * (4.0 * d[0] + 28.0 * d[2] + 32.0 * d[3] + 40.0 * d[4]);

        Self {
            densities: d,
            temperature,
        }
    }
}

/// Node temperatures and gradients of the mesosphere and of the lower
/// stratosphere/troposphere.
///
/// The top node of the upper profile is the bottom node of the
/// lower-thermosphere profile, and the top node of the lower profile is the
/// bottom node of the upper one.
fn node_profiles(
    basis: &HarmonicBasis,
    switches: &Switches,
    thermosphere: &Thermosphere,
) -> (TemperatureNodes<4>, TemperatureNodes<5>) {
    let s20 = switches.main(Effect::MiddleAtmosphereNodes);
    let s22 = switches.main(Effect::LowerAtmosphereNodes);
    let activity = &thermosphere.activity;
    let glob7s = |row: usize| basis.glob7s(&PMA[row], activity);
    let mean = |row: usize| PMA[row][0] * PAVGM[row];

    let top = &thermosphere.profile.nodes;
    let mut upper = TemperatureNodes {
        altitudes: [THERMOSPHERE_FLOOR_KM, 55.0, 45.0, 32.5],
        temperatures: [top.temperatures[4], 0.0, 0.0, 0.0],
        gradients: [top.gradients[1], 0.0],
    };
    upper.temperatures[1] = mean(0) / (1.0 - s20 * glob7s(0));
    upper.temperatures[2] = mean(1) / (1.0 - s20 * glob7s(1));
    upper.temperatures[3] = mean(2) / (1.0 - s20 * s22 * glob7s(2));
    upper.gradients[1] = PAVGM[8] * PMA[9][0] * (1.0 + s20 * s22 * glob7s(9))
        * upper.temperatures[3].powi(2)
        / mean(2).powi(2);

    let mut lower = TemperatureNodes {
        altitudes: [32.5, 20.0, 15.0, 10.0, 0.0],
        temperatures: [upper.temperatures[3], 0.0, 0.0, 0.0, 0.0],
        gradients: [upper.gradients[1], 0.0],
    };
    for k in 1..5 {
        lower.temperatures[k] = mean(2 + k) / (1.0 - s22 * glob7s(2 + k));
    }
    lower.gradients[1] = PMA[7][0] * PAVGM[7] * (1.0 + s22 * glob7s(7))
        * lower.temperatures[4].powi(2)
        / mean(6).powi(2);

    (upper, lower)
}
