//! Model configuration
//!
//! A [`ModelConfig`] bundles the effect switches with the tuning of the
//! pressure-level solver. Every field has a default, so a configuration file
//! only needs to name what it changes:
//!
//! ```toml
//! switches = [0, 1, 1, 1, 1, 1, 1, 1, 1, -1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
//!
//! [solver]
//! max_iterations = 20
//! ```

use crate::errors::{MsisError, MsisResult};
use crate::switches::Switches;
use serde::{Deserialize, Serialize};

/// Parameters of the pressure-level solver
///
/// The solver takes Newton steps in altitude using the local scale height
/// until the common logarithm of the pressure matches the target:
///
/// $$ z_{n+1} = z_n - H \cdot f \cdot (\log_{10} p_{target} - \log_{10} p_n) $$
///
/// where $f$ is [`log_step_factor`](Self::log_step_factor) for iterations
/// before [`damped_iterations`](Self::damped_iterations) and 1 from then on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParameters {
    /// Convergence threshold on the difference of the logarithms of target
    /// and computed pressure
    /// unit: log10(mbar)
    /// default: 0.00043
    pub tolerance: f64,

    /// Iterations after which the solver gives up
    /// default: 12
    pub max_iterations: usize,

    /// Iteration from which steps are no longer scaled by `log_step_factor`
    /// default: 6
    pub damped_iterations: usize,

    /// Step multiplier for the early iterations (ln 10, rounded)
    /// default: 2.302
    pub log_step_factor: f64,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            tolerance: 0.00043,
            max_iterations: 12,
            damped_iterations: 6,
            log_step_factor: 2.302,
        }
    }
}

/// Switches and solver tuning for a model run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    pub switches: Switches,
    pub solver: SolverParameters,
}

impl ModelConfig {
    /// Parse a configuration from TOML.
    ///
    /// Missing fields take their defaults. Switch vectors are validated as
    /// they are read.
    pub fn from_toml_str(text: &str) -> MsisResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| MsisError::Config(e.to_string()))?;
        log::debug!(
            "Loaded model configuration: switches {:?}, solver {:?}",
            config.switches.as_array(),
            config.solver
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MsisResult<String> {
        toml::to_string(self).map_err(|e| MsisError::Config(e.to_string()))
    }
}
