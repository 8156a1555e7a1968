//! Thermosphere species calculator
//!
//! Valid at and above 72.5 km. The exospheric temperature, lower-boundary
//! temperature and temperature-gradient shape are global expansions of their
//! coefficient rows; together with the lower-thermosphere nodes they fix a
//! [`BatesProfile`]. Each species then follows diffusive equilibrium from its
//! own lower-boundary density, blended toward a fully mixed profile below the
//! turbopause and corrected for chemistry and dissociation where those matter.

use crate::harmonics::{HarmonicBasis, MagneticActivity};
use crate::profile::{ccor, ccor2, dnet, BatesProfile, Gravity, ThermosphereNodes};
use rsmsis_core::coefficients::{PD, PDL, PDM, PMA, PS, PT, PTL, PTM};
use rsmsis_core::constants::{
    AMU_GRAMS, DAY_TO_RAD, DEG_TO_RAD, LOWER_THERMOSPHERE_CEILING_KM, THERMOSPHERE_FLOOR_KM,
};
use rsmsis_core::switches::{Effect, Switches};

/// Thermal diffusion coefficients, in output order
const ALPHA: [f64; 9] = [-0.38, 0.0, 0.0, 0.0, 0.17, 0.0, -0.38, 0.0, 0.0];

/// Altitudes (km) above which each species is taken to be in diffusive
/// equilibrium: He, O, N2, O2, Ar, H, N, hot O.
const DIFFUSIVE_CUTOFF: [f64; 8] = [200.0, 300.0, 160.0, 250.0, 240.0, 450.0, 320.0, 450.0];

/// Thermosphere densities (cm⁻³, g/cm³) and temperatures (K), with the
/// intermediate state the lower-atmosphere model continues from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thermosphere {
    pub densities: [f64; 9],
    /// Exospheric temperature and temperature at altitude
    pub temperatures: [f64; 2],
    /// The temperature profile the densities were integrated through
    pub profile: BatesProfile,
    /// Fully mixed N2 density at altitude. Zero above the N2 cutoff.
    pub mixed_n2: f64,
    /// Geomagnetic terms left by the last expansion
    pub activity: MagneticActivity,
}

impl Thermosphere {
    /// Evaluate the thermosphere at `alt` km.
    pub fn calculate(
        basis: &HarmonicBasis,
        switches: &Switches,
        gravity: &Gravity,
        alt: f64,
    ) -> Self {
        let sw = |effect: Effect| switches.main(effect);
        let drivers = basis.drivers();
        let mut activity = MagneticActivity::default();

        let za = PDL[1][15];
        let mut nodes = ThermosphereNodes {
            altitudes: [za, 110.0, 100.0, 90.0, THERMOSPHERE_FLOOR_KM],
            temperatures: [0.0; 5],
            gradients: [0.0; 2],
        };

        // Exospheric temperature, global mean below the join altitude
        let tinf = if alt > za {
            PTM[0] * PT[0] * (1.0 + sw(Effect::ExosphericTemperature) * basis.globe7(&PT, &mut activity))
        } else {
            PTM[0] * PT[0]
        };

        // Gradient at the lower boundary
        let g0 = if alt > nodes.altitudes[4] {
            PTM[3] * PS[0] * (1.0 + sw(Effect::TemperatureGradient) * basis.globe7(&PS, &mut activity))
        } else {
            PTM[3] * PS[0]
        };

        let tlb = PTM[1]
            * (1.0 + sw(Effect::LowerBoundaryTemperature) * basis.globe7(&PD[3], &mut activity))
            * PD[3][0];
        let sigma = g0 / (tinf - tlb);

        // Lower-thermosphere node temperatures only affect densities below
        // the ceiling
        let s18 = sw(Effect::LowerThermosphereNodes);
        let s20 = sw(Effect::MiddleAtmosphereNodes);
        let variation = if alt < LOWER_THERMOSPHERE_CEILING_KM {
            [
                s18 * basis.glob7s(&PTL[0], &activity),
                s18 * basis.glob7s(&PTL[1], &activity),
                s18 * basis.glob7s(&PTL[2], &activity),
                s18 * s20 * basis.glob7s(&PTL[3], &activity),
                s18 * s20 * basis.glob7s(&PMA[8], &activity),
            ]
        } else {
            [0.0; 5]
        };
        nodes.temperatures[1] = PTM[6] * PTL[0][0] / (1.0 - variation[0]);
        nodes.temperatures[2] = PTM[2] * PTL[1][0] / (1.0 - variation[1]);
        nodes.temperatures[3] = PTM[7] * PTL[2][0] / (1.0 - variation[2]);
        nodes.temperatures[4] = PTM[4] * PTL[3][0] / (1.0 - variation[3]);
        nodes.gradients[1] = PTM[8] * PMA[8][0] * (1.0 + variation[4]) * nodes.temperatures[4].powi(2)
            / (PTM[4] * PTL[3][0]).powi(2);

        let profile = BatesProfile {
            tinf,
            tlb,
            zlb: PTM[5],
            sigma,
            nodes,
        };

        let z = alt;
        let s15 = sw(Effect::DiffusiveDepartures);
        let s21 = sw(Effect::LowerBoundaryDensity);
        let xmm = PDM[2][4];
        let f107a_departure = drivers.f107a - 150.0;
        let du = |alt: f64, dlb: f64, xm: f64, alpha: f64| profile.density(gravity, alt, dlb, xm, alpha);
        let mut d = [0.0; 9];

        // N2
        let g28 = s21 * basis.globe7(&PD[2], &mut activity);
        let zhf = PDL[1][24]
            * (1.0
                + sw(Effect::AsymmetricalAnnual)
                    * PDL[0][24]
                    * (DEG_TO_RAD * drivers.lat).sin()
                    * (DAY_TO_RAD * (drivers.doy - PT[13])).cos());
        let db28 = PDM[2][0] * g28.exp() * PD[2][0];
        d[2] = du(z, db28, 28.0, ALPHA[2]);
        let zh28 = PDM[2][2] * zhf;
        let zhm28 = PDM[2][3] * PDL[1][5];
        let b28 = du(zh28, db28, 28.0 - xmm, ALPHA[2] - 1.0);
        let mut mixed_n2 = 0.0;
        if z <= DIFFUSIVE_CUTOFF[2] {
            mixed_n2 = du(z, b28, xmm, ALPHA[2]);
            if s15 != 0.0 {
                d[2] = dnet(d[2], mixed_n2, zhm28, xmm, 28.0);
            }
        }

        // Density at the turbopause of a species carried on the mixed
        // profile, and that mixed density at altitude
        let mixed = |turbopause: f64, dlb: f64, xm: f64, alpha: f64| {
            let b = du(turbopause, dlb, xm - xmm, alpha - 1.0);
            (b, du(z, b, xmm, 0.0))
        };

        // He
        let g4 = s21 * basis.globe7(&PD[0], &mut activity);
        let db04 = PDM[0][0] * g4.exp() * PD[0][0];
        d[0] = du(z, db04, 4.0, ALPHA[0]);
        if s15 != 0.0 && z < DIFFUSIVE_CUTOFF[0] {
            let (b04, dm04) = mixed(PDM[0][2], db04, 4.0, ALPHA[0]);
            d[0] = dnet(d[0], dm04, zhm28, xmm, 4.0);
            let rl = (b28 * PDM[0][1] / b04).ln();
            let zc04 = PDM[0][4] * PDL[1][0];
            let hc04 = PDM[0][5] * PDL[1][1];
            d[0] *= ccor(z, rl, hc04, zc04);
        }

        // O
        let g16 = s21 * basis.globe7(&PD[1], &mut activity);
        let db16 = PDM[1][0] * g16.exp() * PD[1][0];
        d[1] = du(z, db16, 16.0, ALPHA[1]);
        if s15 != 0.0 && z <= DIFFUSIVE_CUTOFF[1] {
            let (_, dm16) = mixed(PDM[1][2], db16, 16.0, ALPHA[1]);
            d[1] = dnet(d[1], dm16, zhm28, xmm, 16.0);
            let rl = PDM[1][1] * PDL[1][16] * (1.0 + sw(Effect::F107) * PDL[0][23] * f107a_departure);
            let hc16 = PDM[1][5] * PDL[1][3];
            let zc16 = PDM[1][4] * PDL[1][2];
            let hc216 = PDM[1][5] * PDL[1][4];
            d[1] *= ccor2(z, rl, hc16, zc16, hc216);
            let hcc16 = PDM[1][7] * PDL[1][13];
            let zcc16 = PDM[1][6] * PDL[1][12];
            let rc16 = PDM[1][3] * PDL[1][14];
            d[1] *= ccor(z, rc16, hcc16, zcc16);
        }

        // O2
        let g32 = s21 * basis.globe7(&PD[4], &mut activity);
        let db32 = PDM[3][0] * g32.exp() * PD[4][0];
        d[3] = du(z, db32, 32.0, ALPHA[3]);
        if s15 != 0.0 {
            if z <= DIFFUSIVE_CUTOFF[3] {
                let (b32, dm32) = mixed(PDM[3][2], db32, 32.0, ALPHA[3]);
                d[3] = dnet(d[3], dm32, zhm28, xmm, 32.0);
                let rl = (b28 * PDM[3][1] / b32).ln();
                let hc32 = PDM[3][5] * PDL[1][7];
                let zc32 = PDM[3][4] * PDL[1][6];
                d[3] *= ccor(z, rl, hc32, zc32);
            }
            let hcc32 = PDM[3][7] * PDL[1][22];
            let hcc232 = PDM[3][7] * PDL[0][22];
            let zcc32 = PDM[3][6] * PDL[1][21];
            let rc32 = PDM[3][3] * PDL[1][23] * (1.0 + sw(Effect::F107) * PDL[0][23] * f107a_departure);
            d[3] *= ccor2(z, rc32, hcc32, zcc32, hcc232);
        }

        // Ar
        let g40 = s21 * basis.globe7(&PD[5], &mut activity);
        let db40 = PDM[4][0] * g40.exp() * PD[5][0];
        d[4] = du(z, db40, 40.0, ALPHA[4]);
        if s15 != 0.0 && z <= DIFFUSIVE_CUTOFF[4] {
            let (b40, dm40) = mixed(PDM[4][2], db40, 40.0, ALPHA[4]);
            d[4] = dnet(d[4], dm40, zhm28, xmm, 40.0);
            let rl = (b28 * PDM[4][1] / b40).ln();
            let hc40 = PDM[4][5] * PDL[1][9];
            let zc40 = PDM[4][4] * PDL[1][8];
            d[4] *= ccor(z, rl, hc40, zc40);
        }

        // H
        let g1 = s21 * basis.globe7(&PD[6], &mut activity);
        let db01 = PDM[5][0] * g1.exp() * PD[6][0];
        d[6] = du(z, db01, 1.0, ALPHA[6]);
        if s15 != 0.0 && z <= DIFFUSIVE_CUTOFF[6] {
            let (b01, dm01) = mixed(PDM[5][2], db01, 1.0, ALPHA[6]);
            d[6] = dnet(d[6], dm01, zhm28, xmm, 1.0);
            let rl = (b28 * PDM[5][1] * PDL[1][17].abs() / b01).ln();
            let hc01 = PDM[5][5] * PDL[1][11];
            let zc01 = PDM[5][4] * PDL[1][10];
            d[6] *= ccor(z, rl, hc01, zc01);
            let hcc01 = PDM[5][7] * PDL[1][19];
            let zcc01 = PDM[5][6] * PDL[1][18];
            let rc01 = PDM[5][3] * PDL[1][20];
            d[6] *= ccor(z, rc01, hcc01, zcc01);
        }

        // N
        let g14 = s21 * basis.globe7(&PD[7], &mut activity);
        let db14 = PDM[6][0] * g14.exp() * PD[7][0];
        d[7] = du(z, db14, 14.0, ALPHA[7]);
        if s15 != 0.0 && z <= DIFFUSIVE_CUTOFF[7] {
            let (b14, dm14) = mixed(PDM[6][2], db14, 14.0, ALPHA[7]);
            d[7] = dnet(d[7], dm14, zhm28, xmm, 14.0);
            let rl = (b28 * PDM[6][1] * PDL[0][2].abs() / b14).ln();
            let hc14 = PDM[6][5] * PDL[0][1];
            let zc14 = PDM[6][4] * PDL[0][0];
            d[7] *= ccor(z, rl, hc14, zc14);
            let hcc14 = PDM[6][7] * PDL[0][4];
            let zcc14 = PDM[6][6] * PDL[0][3];
            let rc14 = PDM[6][3] * PDL[0][5];
            d[7] *= ccor(z, rc14, hcc14, zcc14);
        }

        // Anomalous O, isothermal at a fixed hot temperature with a scale
        // height correction below its reference altitude
        let g16h = s21 * basis.globe7(&PD[8], &mut activity);
        let db16h = PDM[7][0] * g16h.exp() * PD[8][0];
        let tho = PDM[7][9] * PDL[0][6];
        let dd = profile.isothermal(tho).density(gravity, z, db16h, 16.0, ALPHA[8]);
        let zsht = PDM[7][5];
        let zmho = PDM[7][4];
        let zsho = gravity.scale_height(zmho, 16.0, tho);
        d[8] = dd * (-zsht / zsho * ((-(z - zmho) / zsht).exp() - 1.0)).exp();

        d[5] = AMU_GRAMS
            * (4.0 * d[0] + 16.0 * d[1] + 28.0 * d[2] + 32.0 * d[3] + 40.0 * d[4] + d[6] + 14.0 * d[7]);

        let temperature = profile.temperature(gravity, alt.abs());

        Self {
            densities: d,
            temperatures: [tinf, temperature],
            profile,
            mixed_n2,
            activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonics::Drivers;
    use is_close::is_close;
    use rsmsis_core::input::MsisInput;

    fn evaluate(input: &MsisInput, switches: &Switches, alt: f64) -> Thermosphere {
        let basis = HarmonicBasis::new(Drivers::from_input(input), switches);
        let gravity = Gravity::at_latitude(basis.drivers().lat);
        Thermosphere::calculate(&basis, switches, &gravity, alt)
    }

    #[test]
    fn test_exospheric_temperature_is_global_mean_below_join() {
        let out = evaluate(&MsisInput::default(), &Switches::standard(), 100.0);
        assert!(is_close!(out.temperatures[0], PTM[0] * PT[0]));
    }

    #[test]
    fn test_temperature_approaches_exospheric() {
        let out = evaluate(&MsisInput::default(), &Switches::standard(), 1000.0);
        assert!(is_close!(out.temperatures[1], out.temperatures[0], rel_tol = 1e-3));
    }

    #[test]
    fn test_densities_positive() {
        let switches = Switches::standard();
        for alt in [72.5, 90.0, 120.0, 200.0, 400.0, 800.0] {
            let out = evaluate(&MsisInput::default(), &switches, alt);
            for (i, value) in out.densities.iter().enumerate() {
                assert!(*value > 0.0, "species {} at {} km: {}", i, alt, value);
            }
        }
    }

    #[test]
    fn test_mass_density_excludes_anomalous_oxygen() {
        let out = evaluate(&MsisInput::default(), &Switches::standard(), 600.0);
        let d = out.densities;
        let sum = 4.0 * d[0] + 16.0 * d[1] + 28.0 * d[2] + 32.0 * d[3] + 40.0 * d[4] + d[6] + 14.0 * d[7];
        assert!(is_close!(d[5], AMU_GRAMS * sum));
    }

    #[test]
    fn test_mixed_n2_only_below_cutoff() {
        let switches = Switches::standard();
        assert!(evaluate(&MsisInput::default(), &switches, 100.0).mixed_n2 > 0.0);
        assert_eq!(evaluate(&MsisInput::default(), &switches, 400.0).mixed_n2, 0.0);
    }

    #[test]
    fn test_mixed_n2_independent_of_diffusive_switch() {
        let on = Switches::standard();
        let off = on.with(Effect::DiffusiveDepartures, 0).unwrap();
        let a = evaluate(&MsisInput::default(), &on, 72.5);
        let b = evaluate(&MsisInput::default(), &off, 72.5);
        assert_eq!(a.mixed_n2, b.mixed_n2);
    }

    #[test]
    fn test_nodes_unperturbed_above_ceiling() {
        let out = evaluate(&MsisInput::default(), &Switches::standard(), 400.0);
        assert_eq!(out.profile.nodes.temperatures[1], PTM[6] * PTL[0][0]);
        assert_eq!(out.profile.nodes.temperatures[4], PTM[4] * PTL[3][0]);
    }
}
