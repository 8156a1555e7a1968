//! Physical constants, unit conversions and the fixed altitudes that split the
//! model into its thermosphere and lower-atmosphere regimes.
//!
//! The model is evaluated internally in the units of the published coefficient
//! set (km, degrees, cm⁻³, g/cm³). The public API is SI throughout; the
//! conversions below are the only place the two meet.

/// Degrees to radians, as used by the published model.
pub const DEG_TO_RAD: f64 = 1.74533E-2;

/// Radians to degrees, used when converting SI input to model units.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Angular frequency of the annual cycle (rad/day).
pub const DAY_TO_RAD: f64 = 1.72142E-2;

/// Angular frequency of the UT cycle (rad/s).
pub const SEC_TO_RAD: f64 = 7.2722E-5;

/// Angular frequency of the local-time cycle (rad/hour).
pub const HOUR_TO_RAD: f64 = 0.2618;

/// Gas constant in model units (erg / (mol K) / 1e5, so that scale heights
/// come out in km).
pub const RGAS: f64 = 831.4;

/// Atomic mass unit in grams.
pub const AMU_GRAMS: f64 = 1.66E-24;

/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380649E-23;

/// Boltzmann constant in the units used by the pressure-level fit
/// (mbar cm³ / K).
pub const BOLTZMANN_MBAR_CM3: f64 = 1.3806E-19;

/// Pascals per millibar.
pub const PASCAL_PER_MILLIBAR: f64 = 100.0;

/// Number densities: cm⁻³ to m⁻³.
pub const PER_CM3_TO_PER_M3: f64 = 1.0E6;

/// Mass density: g/cm³ to kg/m³.
pub const G_CM3_TO_KG_M3: f64 = 1.0E3;

/// Metres per kilometre.
pub const METRES_PER_KM: f64 = 1.0E3;

/// Lowest altitude of the thermosphere regime (km).
///
/// Below this altitude O, H, N and anomalous O are not resolved.
pub const THERMOSPHERE_FLOOR_KM: f64 = 72.5;

/// Altitude below which the lower-atmosphere profile is fully mixed (km).
///
/// Between this and [`THERMOSPHERE_FLOOR_KM`] the species densities blend
/// linearly toward the thermosphere solution.
pub const MIXING_FLOOR_KM: f64 = 62.5;

/// Altitude above which lower-thermosphere temperature variations no longer
/// affect density (km).
pub const LOWER_THERMOSPHERE_CEILING_KM: f64 = 300.0;

/// Longitude at or below which longitude-dependent terms are disabled
/// (degrees, as used internally).
pub const LONGITUDE_DISABLED_DEG: f64 = -1000.0;

/// Longitude sentinel in SI units (radians). Any input longitude at or below
/// this value disables the longitude-dependent terms.
pub const LONGITUDE_DISABLED: f64 = LONGITUDE_DISABLED_DEG / RAD_TO_DEG;

/// Mean atmospheric molecular mass at the surface (amu).
pub const MEAN_MOLECULAR_MASS: f64 = 28.95;

/// Molecular masses (amu) of the species in output order. The mass-density
/// slot carries zero.
pub const SPECIES_MASS: [f64; 9] = [4.0, 16.0, 28.0, 32.0, 40.0, 0.0, 1.0, 14.0, 16.0];
