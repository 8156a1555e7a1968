//! NRLMSISE-00 empirical model of the neutral atmosphere
//!
//! Densities of He, O, N2, O2, Ar, H, N and anomalous oxygen, total mass
//! density, and exospheric and local temperature from the ground to the
//! exosphere, as functions of position, time, solar flux and geomagnetic
//! activity.
//!
//! ```
//! use rsmsis::{MsisInput, Nrlmsise00, Species, Switches};
//!
//! let input = MsisInput::default().with_altitude(400_000.0);
//! let output = Nrlmsise00::new()
//!     .calculate(&input, &Switches::standard())
//!     .unwrap();
//! assert!(output.density(Species::AtomicOxygen) > 0.0);
//! ```

pub use rsmsis_components::adapter::{
    Atmosphere, AtmosphericContext, AtmosphericModel, Epoch, Nrlmsise00Model, StandardAtmosphere,
};
pub use rsmsis_components::model::Nrlmsise00;
pub use rsmsis_components::pressure::PressureLevel;
pub use rsmsis_core::errors::{MsisError, MsisResult};
pub use rsmsis_core::input::{local_solar_time, ApHistory, MsisInput};
pub use rsmsis_core::output::{MsisOutput, Species};
pub use rsmsis_core::parameters::{ModelConfig, SolverParameters};
pub use rsmsis_core::space_weather::SpaceWeather;
pub use rsmsis_core::switches::{Effect, GeomagneticMode, Switches};

pub use rsmsis_components;
pub use rsmsis_core;
