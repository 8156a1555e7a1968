//! Atmospheric-model adapters
//!
//! Consumers such as drag models only need temperature, pressure and density
//! at a point. [`AtmosphericModel`] is that interface, implemented by the full
//! NRLMSISE-00 model with fixed space weather ([`Nrlmsise00Model`]) and by a
//! simple altitude-only profile ([`StandardAtmosphere`]).

use crate::model::Nrlmsise00;
use rsmsis_core::constants::METRES_PER_KM;
use rsmsis_core::errors::{MsisError, MsisResult};
use rsmsis_core::input::MsisInput;
use rsmsis_core::output::MsisOutput;
use rsmsis_core::space_weather::SpaceWeather;
use rsmsis_core::switches::Switches;
use serde::{Deserialize, Serialize};

/// Zero Celsius in kelvin
const KELVIN_OFFSET: f64 = 273.15;

/// UT epoch split the way the model consumes it
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Epoch {
    pub year: i32,
    /// Day of year (1-366)
    pub doy: i32,
    /// Seconds in day
    pub sec: f64,
}

/// Where and when the atmosphere is sampled.
///
/// Only the altitude is always required; models that need position or time
/// report [`MsisError::MissingContext`] when they are absent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericContext {
    /// unit: m
    pub altitude: f64,
    /// unit: rad
    pub geodetic_latitude: Option<f64>,
    /// unit: rad
    pub geodetic_longitude: Option<f64>,
    pub epoch: Option<Epoch>,
}

impl AtmosphericContext {
    /// Context with altitude only
    pub fn at_altitude(altitude: f64) -> Self {
        Self {
            altitude,
            ..Default::default()
        }
    }

    pub fn new(altitude: f64, geodetic_latitude: f64, geodetic_longitude: f64, epoch: Epoch) -> Self {
        Self {
            altitude,
            geodetic_latitude: Some(geodetic_latitude),
            geodetic_longitude: Some(geodetic_longitude),
            epoch: Some(epoch),
        }
    }
}

/// Bulk properties of the atmosphere at a point
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    /// unit: K
    pub temperature: f64,
    /// unit: Pa
    pub pressure: f64,
    /// unit: kg/m³
    pub density: f64,
}

pub trait AtmosphericModel {
    /// Temperature (K)
    fn temperature(&self, context: &AtmosphericContext) -> MsisResult<f64> {
        Ok(self.atmosphere(context)?.temperature)
    }

    /// Pressure (Pa)
    fn pressure(&self, context: &AtmosphericContext) -> MsisResult<f64> {
        Ok(self.atmosphere(context)?.pressure)
    }

    /// Mass density (kg/m³)
    fn density(&self, context: &AtmosphericContext) -> MsisResult<f64> {
        Ok(self.atmosphere(context)?.density)
    }

    fn atmosphere(&self, context: &AtmosphericContext) -> MsisResult<Atmosphere>;
}

/// NRLMSISE-00 behind [`AtmosphericModel`], with fixed space weather.
///
/// Local solar time is derived from UT and longitude. Pressure comes from the
/// ideal-gas law over the resolved species.
#[derive(Clone, Debug, PartialEq)]
pub struct Nrlmsise00Model {
    model: Nrlmsise00,
    switches: Switches,
    space_weather: SpaceWeather,
}

impl Nrlmsise00Model {
    pub fn new(space_weather: SpaceWeather) -> Self {
        Self::with_switches(Switches::standard(), space_weather)
    }

    pub fn with_switches(switches: Switches, space_weather: SpaceWeather) -> Self {
        Self {
            model: Nrlmsise00::new(),
            switches,
            space_weather,
        }
    }

    pub fn space_weather(&self) -> &SpaceWeather {
        &self.space_weather
    }

    /// Full model output at a context
    pub fn output(&self, context: &AtmosphericContext) -> MsisResult<MsisOutput> {
        let epoch = context.epoch.ok_or(MsisError::MissingContext("an epoch"))?;
        let (lat, long) = match (context.geodetic_latitude, context.geodetic_longitude) {
            (Some(lat), Some(long)) => (lat, long),
            _ => return Err(MsisError::MissingContext("a geodetic position")),
        };

        let input = MsisInput::from_epoch_position(
            epoch.year,
            epoch.doy,
            epoch.sec,
            context.altitude,
            lat,
            long,
            &self.space_weather,
        );
        self.model.calculate(&input, &self.switches)
    }
}

impl Default for Nrlmsise00Model {
    fn default() -> Self {
        Self::new(SpaceWeather::nominal())
    }
}

impl AtmosphericModel for Nrlmsise00Model {
    fn atmosphere(&self, context: &AtmosphericContext) -> MsisResult<Atmosphere> {
        let output = self.output(context)?;
        Ok(Atmosphere {
            temperature: output.temperature(),
            pressure: output.pressure(),
            density: output.mass_density(),
        })
    }
}

/// Altitude-only analytic atmosphere with troposphere, lower stratosphere and
/// upper stratosphere segments.
///
/// Intended for quick estimates below about 86 km. Above the upper segment the
/// temperature is capped at 2200 °C.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StandardAtmosphere;

impl StandardAtmosphere {
    fn temperature_celsius(altitude: f64) -> f64 {
        if altitude < 11_000.0 {
            15.04 - 0.00649 * altitude
        } else if altitude < 25_000.0 {
            -56.46
        } else {
            (-131.21 + 0.00299 * altitude).min(2200.0)
        }
    }

    fn pressure_kpa(altitude: f64) -> f64 {
        let temperature = Self::temperature_celsius(altitude) + KELVIN_OFFSET;
        if altitude < 11_000.0 {
            101.29 * (temperature / 288.08).powf(5.256)
        } else if altitude < 25_000.0 {
            22.65 * (1.73 - 0.000157 * altitude).exp()
        } else {
            2.488 * (temperature / 216.6).powf(-11.388)
        }
    }
}

impl AtmosphericModel for StandardAtmosphere {
    fn atmosphere(&self, context: &AtmosphericContext) -> MsisResult<Atmosphere> {
        let altitude = context.altitude;
        let temperature = Self::temperature_celsius(altitude) + KELVIN_OFFSET;
        let pressure_kpa = Self::pressure_kpa(altitude);
        Ok(Atmosphere {
            temperature,
            pressure: pressure_kpa * METRES_PER_KM,
            // Specific gas constant of air in kJ/(kg K)
            density: pressure_kpa / (0.2869 * temperature),
        })
    }
}
