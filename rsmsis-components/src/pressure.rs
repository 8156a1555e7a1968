//! Pressure-level solver
//!
//! Finds the altitude at which the model pressure equals a target. The first
//! guess comes from a piecewise fit of altitude against the logarithm of
//! pressure, corrected for latitude and season; Newton steps in altitude
//! using the local scale height refine it.

use crate::model::Nrlmsise00;
use crate::profile::Gravity;
use log::{debug, warn};
use rsmsis_core::constants::{
    BOLTZMANN_MBAR_CM3, MEAN_MOLECULAR_MASS, METRES_PER_KM, PER_CM3_TO_PER_M3, RGAS,
};
use rsmsis_core::errors::{MsisError, MsisResult};
use rsmsis_core::input::MsisInput;
use rsmsis_core::output::MsisOutput;
use rsmsis_core::switches::Switches;

/// Result of a pressure-level search
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressureLevel {
    /// Altitude of the last evaluation
    /// unit: m
    pub altitude: f64,
    /// Model output at `altitude`
    pub output: MsisOutput,
    /// Whether the residual fell below the solver tolerance
    pub converged: bool,
    /// Number of model evaluations
    pub iterations: usize,
    /// Target minus computed pressure at `altitude`
    /// unit: log10(mbar)
    pub residual: f64,
}

impl Nrlmsise00 {
    /// Find the altitude at which the pressure equals `press` millibar.
    ///
    /// Fails with [`MsisError::InvalidPressure`] if `press` is not positive
    /// and finite. Running out of iterations is not an error; the last
    /// estimate is returned with `converged` set to `false`.
    pub fn find_altitude_at_pressure(
        &self,
        input: &MsisInput,
        switches: &Switches,
        press: f64,
    ) -> MsisResult<PressureLevel> {
        if !(press.is_finite() && press > 0.0) {
            return Err(MsisError::InvalidPressure(press));
        }

        let params = self.parameters();
        let pl = press.log10();
        let lat = input.g_lat.to_degrees();
        let gravity = Gravity::at_latitude(lat);
        let mut z = initial_altitude(pl, lat, input.doy as f64);
        let mut iterations = 0;

        loop {
            iterations += 1;
            let output = self.calculate(&input.with_altitude(z * METRES_PER_KM), switches)?;

            // Number density back in cm⁻³ for the fit's Boltzmann constant
            let xn = output.total_number_density() / PER_CM3_TO_PER_M3;
            let p = BOLTZMANN_MBAR_CM3 * xn * output.temperature();
            let diff = pl - p.log10();
            debug!(
                "Pressure search iteration {}: {:.4} km, log10(p) residual {:.3e}",
                iterations, z, diff
            );

            let converged = diff.abs() < params.tolerance;
            if converged || iterations >= params.max_iterations {
                if !converged {
                    warn!(
                        "Pressure search for {} mbar did not converge after {} iterations (residual {:.3e})",
                        press, iterations, diff
                    );
                }
                return Ok(PressureLevel {
                    altitude: z * METRES_PER_KM,
                    output,
                    converged,
                    iterations,
                    residual: diff,
                });
            }

            let xm = output.mean_molecular_mass().unwrap_or(MEAN_MOLECULAR_MASS);
            let sh = RGAS * output.temperature() / (xm * gravity.at_altitude(z));
            let step = if iterations < params.damped_iterations {
                sh * diff * params.log_step_factor
            } else {
                sh * diff
            };
            z -= step;
        }
    }
}

/// First altitude guess (km) for a pressure of `10^pl` mbar
fn initial_altitude(pl: f64, lat: f64, doy: f64) -> f64 {
    if pl < -5.0 {
        return 22.0 * (pl + 4.0).powi(2) + 110.0;
    }

    let mut zi = if pl > 2.5 {
        18.06 * (3.00 - pl)
    } else if pl > 0.075 {
        14.98 * (3.08 - pl)
    } else if pl > -1.0 {
        17.80 * (2.72 - pl)
    } else if pl > -2.0 {
        14.28 * (3.64 - pl)
    } else if pl > -4.0 {
        12.72 * (4.32 - pl)
    } else {
        25.3 * (0.11 - pl)
    };

    let cl = lat / 90.0;
    let cl2 = cl * cl;
    let cd = if doy < 182.0 {
        (1.0 - doy) / 91.25
    } else {
        doy / 91.25 - 3.0
    };
    let ca = if pl > -0.23 {
        (2.79 - pl) / (2.79 + 0.23)
    } else if pl > -1.11 {
        1.0
    } else if pl > -3.0 {
        (-2.93 - pl) / (-2.93 + 1.11)
    } else {
        0.0
    };
    zi -= 4.87 * cl * cd * ca + 1.64 * cl2 * ca - 0.31 * ca * cl;
    zi
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;
    use rsmsis_core::parameters::SolverParameters;

    #[test]
    fn test_rejects_invalid_pressure() {
        let model = Nrlmsise00::new();
        let input = MsisInput::default();
        let switches = Switches::standard();
        for press in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = model.find_altitude_at_pressure(&input, &switches, press);
            assert!(matches!(result, Err(MsisError::InvalidPressure(_))), "{}", press);
        }
    }

    #[test]
    fn test_initial_guess_above_fit_range() {
        assert!(is_close!(initial_altitude(-6.0, 0.0, 100.0), 22.0 * 4.0 + 110.0));
    }

    #[test]
    fn test_initial_guess_equator_has_no_latitude_correction() {
        // At the equator only the fit itself remains
        assert!(is_close!(initial_altitude(0.0, 0.0, 100.0), 17.80 * 2.72));
        assert!(is_close!(initial_altitude(3.0, 0.0, 100.0), 0.0, abs_tol = 1e-12));
    }

    #[test]
    fn test_initial_guess_decreases_with_pressure() {
        let mut previous = f64::INFINITY;
        for pl in [-5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0] {
            let z = initial_altitude(pl, 45.0, 172.0);
            assert!(z < previous, "{} at log10(p) = {}", z, pl);
            previous = z;
        }
    }

    #[test]
    fn test_round_trip_pressure() {
        let model = Nrlmsise00::new();
        let input = MsisInput::default();
        let switches = Switches::standard();
        let level = model.find_altitude_at_pressure(&input, &switches, 1.0E-3).unwrap();
        assert!(level.converged);
        assert!(level.iterations <= 12);

        let output = model
            .calculate(&input.with_altitude(level.altitude), &switches)
            .unwrap();
        let p = output.total_number_density() / PER_CM3_TO_PER_M3
            * BOLTZMANN_MBAR_CM3
            * output.temperature();
        assert!((p.log10() + 3.0).abs() < 0.00043);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let model = Nrlmsise00::from_parameters(SolverParameters {
            tolerance: 0.0,
            max_iterations: 2,
            ..Default::default()
        });
        let level = model
            .find_altitude_at_pressure(&MsisInput::default(), &Switches::standard(), 1.0)
            .unwrap();
        assert!(!level.converged);
        assert_eq!(level.iterations, 2);
    }
}
