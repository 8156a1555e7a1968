//! NRLMSISE-00 model
//!
//! [`Nrlmsise00`] validates the input against the switches, converts it to
//! model units and dispatches by altitude: at and above 72.5 km the
//! thermosphere solution is returned directly; below it the lower-atmosphere
//! model continues from the thermosphere solution at 72.5 km.

use crate::harmonics::{Drivers, HarmonicBasis};
use crate::lower_atmosphere::LowerAtmosphere;
use crate::profile::Gravity;
use crate::thermosphere::Thermosphere;
use log::debug;
use rsmsis_core::constants::{AMU_GRAMS, METRES_PER_KM, THERMOSPHERE_FLOOR_KM};
use rsmsis_core::errors::{MsisError, MsisResult};
use rsmsis_core::input::MsisInput;
use rsmsis_core::output::{MsisOutput, Species};
use rsmsis_core::parameters::{ModelConfig, SolverParameters};
use rsmsis_core::switches::{Effect, Switches};

/// The NRLMSISE-00 empirical model of the neutral atmosphere.
///
/// The model itself is stateless; it only carries the tuning of the
/// pressure-level solver.
///
/// # Example
///
/// ```
/// use rsmsis_components::model::Nrlmsise00;
/// use rsmsis_core::input::MsisInput;
/// use rsmsis_core::output::Species;
/// use rsmsis_core::switches::Switches;
///
/// let model = Nrlmsise00::new();
/// let output = model
///     .calculate(&MsisInput::default(), &Switches::standard())
///     .unwrap();
/// assert!(output.density(Species::MassDensity) > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nrlmsise00 {
    parameters: SolverParameters,
}

impl Nrlmsise00 {
    pub fn new() -> Self {
        Self::from_parameters(SolverParameters::default())
    }

    pub fn from_parameters(parameters: SolverParameters) -> Self {
        Self { parameters }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::from_parameters(config.solver)
    }

    pub fn parameters(&self) -> &SolverParameters {
        &self.parameters
    }

    /// Densities and temperatures at the input point.
    ///
    /// Total mass density excludes anomalous oxygen. Below 72.5 km O, H, N
    /// and anomalous O are zero.
    pub fn calculate(&self, input: &MsisInput, switches: &Switches) -> MsisResult<MsisOutput> {
        let (d, t) = self.evaluate(input, switches)?;
        Ok(MsisOutput::from_model_units(d, t))
    }

    /// As [`calculate`](Self::calculate), but the total mass density includes
    /// anomalous oxygen, which matters for drag above about 500 km.
    pub fn calculate_with_drag(
        &self,
        input: &MsisInput,
        switches: &Switches,
    ) -> MsisResult<MsisOutput> {
        let (mut d, t) = self.evaluate(input, switches)?;
        d[Species::MassDensity.index()] += AMU_GRAMS * 16.0 * d[Species::AnomalousOxygen.index()];
        Ok(MsisOutput::from_model_units(d, t))
    }

    /// The thermosphere solution at the input altitude, without the
    /// lower-atmosphere model. Only meaningful at or above 72.5 km.
    pub fn calculate_thermosphere(
        &self,
        input: &MsisInput,
        switches: &Switches,
    ) -> MsisResult<MsisOutput> {
        validate(input, switches)?;
        let (basis, gravity) = setup(input, switches);
        let thermosphere =
            Thermosphere::calculate(&basis, switches, &gravity, input.alt / METRES_PER_KM);
        Ok(MsisOutput::from_model_units(
            thermosphere.densities,
            thermosphere.temperatures,
        ))
    }

    /// Densities (cm⁻³, g/cm³) and temperatures (K) in model units
    fn evaluate(&self, input: &MsisInput, switches: &Switches) -> MsisResult<([f64; 9], [f64; 2])> {
        validate(input, switches)?;
        let (basis, gravity) = setup(input, switches);

        let alt = input.alt / METRES_PER_KM;
        let thermosphere = Thermosphere::calculate(
            &basis,
            switches,
            &gravity,
            alt.max(THERMOSPHERE_FLOOR_KM),
        );

        if alt >= THERMOSPHERE_FLOOR_KM {
            return Ok((thermosphere.densities, thermosphere.temperatures));
        }

        debug!("{} km is below the thermosphere, using the lower-atmosphere model", alt);
        let lower = LowerAtmosphere::calculate(&basis, switches, &gravity, alt, &thermosphere);
        Ok((
            lower.densities,
            [thermosphere.temperatures[0], lower.temperature],
        ))
    }
}

fn validate(input: &MsisInput, switches: &Switches) -> MsisResult<()> {
    if switches.uses_ap_history() && input.ap_history.is_none() {
        return Err(MsisError::MissingApHistory);
    }
    Ok(())
}

/// Expansion basis and gravity for an input. With time-independent terms
/// switched off gravity is taken at 45°.
fn setup(input: &MsisInput, switches: &Switches) -> (HarmonicBasis, Gravity) {
    let drivers = Drivers::from_input(input);
    let gravity_lat = if switches.main(Effect::TimeIndependent) == 0.0 {
        45.0
    } else {
        drivers.lat
    };
    (
        HarmonicBasis::new(drivers, switches),
        Gravity::at_latitude(gravity_lat),
    )
}
