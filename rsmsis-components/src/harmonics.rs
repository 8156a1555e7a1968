//! Global harmonic expansion
//!
//! Every horizontally varying quantity of the model (exospheric temperature,
//! lower-boundary densities, node temperatures) is a coefficient row evaluated
//! over the same basis: associated Legendre polynomials in the sine of
//! latitude, harmonics of local solar time, annual and semiannual cycles in
//! day of year, solar flux departures, geomagnetic activity, longitude and UT.
//!
//! Two expansions share the basis:
//!
//! - [`HarmonicBasis::globe7`] is the full upper-thermosphere expansion over a
//!   150-slot row. It also refreshes the [`MagneticActivity`] terms.
//! - [`HarmonicBasis::glob7s`] is the reduced lower-atmosphere expansion over a
//!   100-slot row. It reads the magnetic activity left by the last `globe7`
//!   evaluation instead of computing its own.

use rsmsis_core::constants::{
    DAY_TO_RAD, DEG_TO_RAD, HOUR_TO_RAD, LONGITUDE_DISABLED, LONGITUDE_DISABLED_DEG, RAD_TO_DEG,
    SEC_TO_RAD,
};
use rsmsis_core::input::{ApHistory, MsisInput};
use rsmsis_core::switches::{Switches, SWITCH_COUNT};

/// Geophysical drivers of the expansion in model units (degrees, hours, days).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drivers {
    /// Day of year
    pub doy: f64,
    /// UT
    /// unit: s
    pub sec: f64,
    /// Geodetic latitude
    /// unit: deg
    pub lat: f64,
    /// Geodetic longitude, or [`LONGITUDE_DISABLED_DEG`]
    /// unit: deg
    pub long: f64,
    /// Local solar time
    /// unit: hours
    pub lst: f64,
    pub f107a: f64,
    pub f107: f64,
    pub ap: f64,
    pub ap_history: ApHistory,
}

impl Drivers {
    pub fn from_input(input: &MsisInput) -> Self {
        let long = if input.g_long <= LONGITUDE_DISABLED {
            LONGITUDE_DISABLED_DEG
        } else {
            input.g_long * RAD_TO_DEG
        };

        Self {
            doy: input.doy as f64,
            sec: input.sec,
            lat: input.g_lat * RAD_TO_DEG,
            long,
            lst: input.lst,
            f107a: input.f107a,
            f107: input.f107,
            ap: input.ap,
            ap_history: input.ap_history.unwrap_or_default(),
        }
    }

    fn longitude_enabled(&self) -> bool {
        self.long > LONGITUDE_DISABLED_DEG
    }
}

/// Geomagnetic activity terms of the most recent full expansion.
///
/// The reduced expansion has no geomagnetic coefficients of its own and
/// reuses these. Which row produced them therefore matters, and callers
/// thread one value through their sequence of evaluations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MagneticActivity {
    /// Saturated daily Ap departure
    pub daily: f64,
    /// Time-weighted Ap history
    pub history: f64,
}

/// The expansion basis for one model evaluation.
#[derive(Clone, Debug)]
pub struct HarmonicBasis {
    drivers: Drivers,
    sw: [f64; SWITCH_COUNT],
    swc: [f64; SWITCH_COUNT],
    /// Associated Legendre polynomials `plg[m][n]` of sin(latitude)
    plg: [[f64; 9]; 4],
    /// sin and cos of 1, 2 and 3 times the local-time phase
    sin_lst: [f64; 3],
    cos_lst: [f64; 3],
    /// F10.7A departure from 150
    dfa: f64,
}

impl HarmonicBasis {
    pub fn new(drivers: Drivers, switches: &Switches) -> Self {
        let plg = legendre(drivers.lat);
        let tloc = drivers.lst;
        let phases = [HOUR_TO_RAD * tloc, 2.0 * HOUR_TO_RAD * tloc, 3.0 * HOUR_TO_RAD * tloc];

        Self {
            drivers,
            sw: *switches.main_multipliers(),
            swc: *switches.cross_multipliers(),
            plg,
            sin_lst: phases.map(f64::sin),
            cos_lst: phases.map(f64::cos),
            dfa: drivers.f107a - 150.0,
        }
    }

    pub fn drivers(&self) -> &Drivers {
        &self.drivers
    }

    /// Legendre polynomial of order `m` and degree `n`
    pub fn legendre(&self, m: usize, n: usize) -> f64 {
        self.plg[m][n]
    }

    /// Evaluate the upper-thermosphere expansion of a coefficient row.
    ///
    /// Returns `p[30]` plus the switched sum of the term groups. `activity`
    /// is updated with the geomagnetic terms computed from this row.
    pub fn globe7(&self, p: &[f64; 150], activity: &mut MagneticActivity) -> f64 {
        let sw = &self.sw;
        let swc = &self.swc;
        let plg = &self.plg;
        let d = &self.drivers;
        let dfa = self.dfa;
        let mut t = [0.0; 15];

        let cd32 = (DAY_TO_RAD * (d.doy - p[31])).cos();
        let cd18 = (2.0 * DAY_TO_RAD * (d.doy - p[17])).cos();
        let cd14 = (DAY_TO_RAD * (d.doy - p[13])).cos();
        let cd39 = (2.0 * DAY_TO_RAD * (d.doy - p[38])).cos();

        // F10.7
        let df = d.f107 - d.f107a;
        t[0] = p[19] * df * (1.0 + p[59] * dfa) + p[20] * df * df + p[21] * dfa + p[29] * dfa * dfa;
        let f1 = 1.0 + (p[47] * dfa + p[19] * df + p[20] * df * df) * swc[1];
        let f2 = 1.0 + (p[49] * dfa + p[19] * df + p[20] * df * df) * swc[1];

        // Time independent
        t[1] = (p[1] * plg[0][2] + p[2] * plg[0][4] + p[22] * plg[0][6])
            + p[14] * plg[0][2] * dfa * swc[1]
            + p[26] * plg[0][1];

        // Symmetrical annual and semiannual
        t[2] = p[18] * cd32;
        t[3] = (p[15] + p[16] * plg[0][2]) * cd18;

        // Asymmetrical annual and semiannual
        t[4] = f1 * (p[9] * plg[0][1] + p[10] * plg[0][3]) * cd14;
        t[5] = p[37] * plg[0][1] * cd39;

        if sw[7] != 0.0 {
            let t71 = p[11] * plg[1][2] * cd14 * swc[5];
            let t72 = p[12] * plg[1][2] * cd14 * swc[5];
            t[6] = f2
                * ((p[3] * plg[1][1] + p[4] * plg[1][3] + p[27] * plg[1][5] + t71) * self.cos_lst[0]
                    + (p[6] * plg[1][1] + p[7] * plg[1][3] + p[28] * plg[1][5] + t72)
                        * self.sin_lst[0]);
        }

        if sw[8] != 0.0 {
            let t81 = (p[23] * plg[2][3] + p[35] * plg[2][5]) * cd14 * swc[5];
            let t82 = (p[33] * plg[2][3] + p[36] * plg[2][5]) * cd14 * swc[5];
            t[7] = f2
                * ((p[5] * plg[2][2] + p[41] * plg[2][4] + t81) * self.cos_lst[1]
                    + (p[8] * plg[2][2] + p[42] * plg[2][4] + t82) * self.sin_lst[1]);
        }

        if sw[14] != 0.0 {
            t[13] = f2
                * ((p[39] * plg[3][3]
                    + (p[93] * plg[3][4] + p[46] * plg[3][6]) * cd14 * swc[5])
                    * self.sin_lst[2]
                    + (p[40] * plg[3][3]
                        + (p[94] * plg[3][4] + p[48] * plg[3][6]) * cd14 * swc[5])
                        * self.cos_lst[2]);
        }

        // Geomagnetic activity
        if sw[9] == -1.0 {
            if p[51] != 0.0 {
                let exp1 = (-10800.0 * p[51].abs() / (1.0 + p[138] * (45.0 - d.lat.abs())))
                    .exp()
                    .min(0.99999);
                let p24 = p[24].max(1.0E-4);
                activity.history = sg0(exp1, p24, p[25], d.ap_history.values());
                t[8] = activity.history
                    * (p[50]
                        + p[96] * plg[0][2]
                        + p[54] * plg[0][4]
                        + (p[125] * plg[0][1] + p[126] * plg[0][3] + p[127] * plg[0][5])
                            * cd14
                            * swc[5]
                        + (p[128] * plg[1][1] + p[129] * plg[1][3] + p[130] * plg[1][5])
                            * swc[7]
                            * (HOUR_TO_RAD * (d.lst - p[131])).cos());
            }
        } else {
            let apd = d.ap - 4.0;
            let p44 = if p[43] < 0.0 { 1.0E-5 } else { p[43] };
            let p45 = p[44];
            activity.daily = apd + (p45 - 1.0) * (apd + ((-p44 * apd).exp() - 1.0) / p44);
            if sw[9] != 0.0 {
                t[8] = activity.daily
                    * (p[32]
                        + p[45] * plg[0][2]
                        + p[34] * plg[0][4]
                        + (p[100] * plg[0][1] + p[101] * plg[0][3] + p[102] * plg[0][5])
                            * cd14
                            * swc[5]
                        + (p[121] * plg[1][1] + p[122] * plg[1][3] + p[123] * plg[1][5])
                            * swc[7]
                            * (HOUR_TO_RAD * (d.lst - p[124])).cos());
            }
        }

        if sw[10] != 0.0 && d.longitude_enabled() {
            let (sin_long, cos_long) = (DEG_TO_RAD * d.long).sin_cos();

            // Longitudinal
            if sw[11] != 0.0 {
                t[10] = (1.0 + p[80] * dfa * swc[1])
                    * ((p[64] * plg[1][2]
                        + p[65] * plg[1][4]
                        + p[66] * plg[1][6]
                        + p[103] * plg[1][1]
                        + p[104] * plg[1][3]
                        + p[105] * plg[1][5]
                        + swc[5]
                            * (p[109] * plg[1][1] + p[110] * plg[1][3] + p[111] * plg[1][5])
                            * cd14)
                        * cos_long
                        + (p[90] * plg[1][2]
                            + p[91] * plg[1][4]
                            + p[92] * plg[1][6]
                            + p[106] * plg[1][1]
                            + p[107] * plg[1][3]
                            + p[108] * plg[1][5]
                            + swc[5]
                                * (p[112] * plg[1][1] + p[113] * plg[1][3] + p[114] * plg[1][5])
                                * cd14)
                            * sin_long);
            }

            // UT and mixed UT/longitude
            if sw[12] != 0.0 {
                t[11] = (1.0 + p[95] * plg[0][1])
                    * (1.0 + p[81] * dfa * swc[1])
                    * (1.0 + p[119] * plg[0][1] * swc[5] * cd14)
                    * ((p[68] * plg[0][1] + p[69] * plg[0][3] + p[70] * plg[0][5])
                        * (SEC_TO_RAD * (d.sec - p[71])).cos());
                t[11] += swc[11]
                    * (p[76] * plg[2][3] + p[77] * plg[2][5] + p[78] * plg[2][7])
                    * (SEC_TO_RAD * (d.sec - p[79]) + 2.0 * DEG_TO_RAD * d.long).cos()
                    * (1.0 + p[137] * dfa * swc[1]);
            }

            // Mixed Ap/UT/longitude
            if sw[13] != 0.0 {
                if sw[9] == -1.0 {
                    if p[51] != 0.0 {
                        let a = activity.history;
                        t[12] = a
                            * swc[11]
                            * (1.0 + p[132] * plg[0][1])
                            * ((p[52] * plg[1][2] + p[98] * plg[1][4] + p[67] * plg[1][6])
                                * (DEG_TO_RAD * (d.long - p[97])).cos())
                            + a * swc[11]
                                * swc[5]
                                * (p[133] * plg[1][1] + p[134] * plg[1][3] + p[135] * plg[1][5])
                                * cd14
                                * (DEG_TO_RAD * (d.long - p[136])).cos()
                            + a * swc[12]
                                * (p[55] * plg[0][1] + p[56] * plg[0][3] + p[57] * plg[0][5])
                                * (SEC_TO_RAD * (d.sec - p[58])).cos();
                    }
                } else {
                    let a = activity.daily;
                    t[12] = a
                        * swc[11]
                        * (1.0 + p[120] * plg[0][1])
                        * ((p[60] * plg[1][2] + p[61] * plg[1][4] + p[62] * plg[1][6])
                            * (DEG_TO_RAD * (d.long - p[63])).cos())
                        + a * swc[11]
                            * swc[5]
                            * (p[115] * plg[1][1] + p[116] * plg[1][3] + p[117] * plg[1][5])
                            * cd14
                            * (DEG_TO_RAD * (d.long - p[118])).cos()
                        + a * swc[12]
                            * (p[83] * plg[0][1] + p[84] * plg[0][3] + p[85] * plg[0][5])
                            * (SEC_TO_RAD * (d.sec - p[75])).cos();
                }
            }
        }

        p[30] + self.switched_sum(&t)
    }

    /// Evaluate the lower-atmosphere expansion of a coefficient row.
    pub fn glob7s(&self, p: &[f64; 100], activity: &MagneticActivity) -> f64 {
        let sw = &self.sw;
        let swc = &self.swc;
        let plg = &self.plg;
        let d = &self.drivers;
        let mut t = [0.0; 15];

        let cd32 = (DAY_TO_RAD * (d.doy - p[31])).cos();
        let cd18 = (2.0 * DAY_TO_RAD * (d.doy - p[17])).cos();
        let cd14 = (DAY_TO_RAD * (d.doy - p[13])).cos();
        let cd39 = (2.0 * DAY_TO_RAD * (d.doy - p[38])).cos();

        t[0] = p[21] * self.dfa;
        t[1] = p[1] * plg[0][2]
            + p[2] * plg[0][4]
            + p[22] * plg[0][6]
            + p[26] * plg[0][1]
            + p[14] * plg[0][3]
            + p[59] * plg[0][5];
        t[2] = (p[18] + p[47] * plg[0][2] + p[29] * plg[0][4]) * cd32;
        t[3] = (p[15] + p[16] * plg[0][2] + p[30] * plg[0][4]) * cd18;
        t[4] = (p[9] * plg[0][1] + p[10] * plg[0][3] + p[20] * plg[0][5]) * cd14;
        t[5] = p[37] * plg[0][1] * cd39;

        if sw[7] != 0.0 {
            let t71 = p[11] * plg[1][2] * cd14 * swc[5];
            let t72 = p[12] * plg[1][2] * cd14 * swc[5];
            t[6] = (p[3] * plg[1][1] + p[4] * plg[1][3] + t71) * self.cos_lst[0]
                + (p[6] * plg[1][1] + p[7] * plg[1][3] + t72) * self.sin_lst[0];
        }

        if sw[8] != 0.0 {
            let t81 = (p[23] * plg[2][3] + p[35] * plg[2][5]) * cd14 * swc[5];
            let t82 = (p[33] * plg[2][3] + p[36] * plg[2][5]) * cd14 * swc[5];
            t[7] = (p[5] * plg[2][2] + p[41] * plg[2][4] + t81) * self.cos_lst[1]
                + (p[8] * plg[2][2] + p[42] * plg[2][4] + t82) * self.sin_lst[1];
        }

        if sw[14] != 0.0 {
            t[13] = p[39] * plg[3][3] * self.sin_lst[2] + p[40] * plg[3][3] * self.cos_lst[2];
        }

        if sw[9] == 1.0 {
            t[8] = activity.daily * (p[32] + p[45] * plg[0][2] * swc[2]);
        } else if sw[9] == -1.0 {
            t[8] = p[50] * activity.history + p[96] * plg[0][2] * activity.history * swc[2];
        }

        if sw[10] != 0.0 && sw[11] != 0.0 && d.longitude_enabled() {
            let (sin_long, cos_long) = (DEG_TO_RAD * d.long).sin_cos();
            t[10] = (1.0
                + plg[0][1]
                    * (p[80] * swc[5] * (DAY_TO_RAD * (d.doy - p[81])).cos()
                        + p[85] * swc[6] * (2.0 * DAY_TO_RAD * (d.doy - p[86])).cos())
                + p[83] * swc[3] * (DAY_TO_RAD * (d.doy - p[84])).cos()
                + p[87] * swc[4] * (2.0 * DAY_TO_RAD * (d.doy - p[88])).cos())
                * ((p[64] * plg[1][2]
                    + p[65] * plg[1][4]
                    + p[66] * plg[1][6]
                    + p[74] * plg[1][1]
                    + p[75] * plg[1][3]
                    + p[76] * plg[1][5])
                    * cos_long
                    + (p[90] * plg[1][2]
                        + p[91] * plg[1][4]
                        + p[92] * plg[1][6]
                        + p[77] * plg[1][1]
                        + p[78] * plg[1][3]
                        + p[79] * plg[1][5])
                        * sin_long);
        }

        self.switched_sum(&t)
    }

    /// Sum of term groups, each weighted by the magnitude of its switch
    fn switched_sum(&self, t: &[f64; 15]) -> f64 {
        t.iter()
            .take(14)
            .enumerate()
            .map(|(i, term)| self.sw[i + 1].abs() * term)
            .sum()
    }
}

/// Associated Legendre polynomials of sin(latitude) up to degree 7, order 3.
fn legendre(lat_deg: f64) -> [[f64; 9]; 4] {
    let mut plg = [[0.0; 9]; 4];
    let c = (lat_deg * DEG_TO_RAD).sin();
    let s = (lat_deg * DEG_TO_RAD).cos();
    let c2 = c * c;
    let c4 = c2 * c2;
    let s2 = s * s;

    plg[0][1] = c;
    plg[0][2] = 0.5 * (3.0 * c2 - 1.0);
    plg[0][3] = 0.5 * (5.0 * c * c2 - 3.0 * c);
    plg[0][4] = (35.0 * c4 - 30.0 * c2 + 3.0) / 8.0;
    plg[0][5] = (63.0 * c2 * c2 * c - 70.0 * c2 * c + 15.0 * c) / 8.0;
    plg[0][6] = (11.0 * c * plg[0][5] - 5.0 * plg[0][4]) / 6.0;

    plg[1][1] = s;
    plg[1][2] = 3.0 * c * s;
    plg[1][3] = 1.5 * (5.0 * c2 - 1.0) * s;
    plg[1][4] = 2.5 * (7.0 * c2 * c - 3.0 * c) * s;
    plg[1][5] = 1.875 * (21.0 * c4 - 14.0 * c2 + 1.0) * s;
    plg[1][6] = (11.0 * c * plg[1][5] - 6.0 * plg[1][4]) / 5.0;

    plg[2][2] = 3.0 * s2;
    plg[2][3] = 15.0 * s2 * c;
    plg[2][4] = 7.5 * (7.0 * c2 - 1.0) * s2;
    plg[2][5] = 3.0 * c * plg[2][4] - 2.0 * plg[2][3];
    plg[2][6] = (11.0 * c * plg[2][5] - 7.0 * plg[2][4]) / 4.0;
    plg[2][7] = (13.0 * c * plg[2][6] - 8.0 * plg[2][5]) / 5.0;

    plg[3][3] = 15.0 * s2 * s;
    plg[3][4] = 105.0 * s2 * s * c;
    plg[3][5] = (9.0 * c * plg[3][4] - 7.0 * plg[3][3]) / 2.0;
    plg[3][6] = (11.0 * c * plg[3][5] - 8.0 * plg[3][4]) / 3.0;

    plg
}

/// Saturating response to a 3-hour Ap index
fn g0(a: f64, p24: f64, p25: f64) -> f64 {
    let x = a - 4.0;
    x + (p25 - 1.0) * (x + ((-p24.abs() * x).exp() - 1.0) / p24.abs())
}

/// Normalisation of the weighted history sum
fn sumex(ex: f64) -> f64 {
    1.0 + (1.0 - ex.powi(19)) / (1.0 - ex) * ex.sqrt()
}

/// Exponentially weighted sum of the Ap history, decaying by `ex` per 3 hours
fn sg0(ex: f64, p24: f64, p25: f64, ap: &[f64; 7]) -> f64 {
    let g = |a: f64| g0(a, p24, p25);
    (g(ap[1])
        + (g(ap[2]) * ex
            + g(ap[3]) * ex * ex
            + g(ap[4]) * ex.powi(3)
            + (g(ap[5]) * ex.powi(4) + g(ap[6]) * ex.powi(12)) * (1.0 - ex.powi(8)) / (1.0 - ex)))
        / sumex(ex)
}
