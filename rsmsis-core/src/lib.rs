//! Core types of the NRLMSISE-00 neutral atmosphere model
//!
//! This crate holds everything the model components share: the SI input and
//! output value types, the 24-slot effect switches, space-weather presets,
//! configuration, the coefficient tables and the cubic spline used by the
//! vertical temperature profiles.

pub mod coefficients;
pub mod constants;
pub mod errors;
pub mod input;
pub mod output;
pub mod parameters;
pub mod space_weather;
pub mod spline;
pub mod switches;
