//! NRLMSISE-00 model components
//!
//! The model is assembled from a handful of pieces that mirror the physics:
//!
//! # Module Organisation
//!
//! - `harmonics`: Legendre/harmonic expansion of the geophysical drivers
//! - `profile`: Gravity, vertical temperature profiles and density corrections
//! - `thermosphere`: Species densities and temperature from 72.5 km upwards
//! - `lower_atmosphere`: Well-mixed atmosphere below 72.5 km
//! - `model`: The [`Nrlmsise00`](model::Nrlmsise00) aggregator
//! - `pressure`: Altitude of a given pressure level
//! - `adapter`: Simple temperature/pressure/density interface for consumers

pub mod adapter;
pub mod harmonics;
pub mod lower_atmosphere;
pub mod model;
pub mod pressure;
pub mod profile;
pub mod thermosphere;
