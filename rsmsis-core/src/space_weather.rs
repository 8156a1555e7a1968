//! Solar and geomagnetic activity indices

use crate::input::ApHistory;
use serde::{Deserialize, Serialize};

/// Space-weather state driving the model.
///
/// Typical F10.7 values are 70-80 at solar minimum, around 150 for moderate
/// activity and 250 or more at solar maximum (units of 10⁻²² W m⁻² Hz⁻¹).
/// Daily Ap is 0-7 when quiet, 8-15 unsettled, 16-29 active and 30 or more
/// during storms.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceWeather {
    /// Daily F10.7 flux for the previous day
    pub f107: f64,
    /// 81-day average of F10.7 flux
    pub f107a: f64,
    /// Daily magnetic index
    pub ap: f64,
    /// Ap history
    #[serde(default)]
    pub ap_history: Option<ApHistory>,
}

impl SpaceWeather {
    /// Quiet conditions: F10.7 = F10.7A = 150, Ap = 4
    pub fn nominal() -> Self {
        Self {
            f107: 150.0,
            f107a: 150.0,
            ap: 4.0,
            ap_history: Some(ApHistory::quiet()),
        }
    }

    /// Very quiet sun: F10.7 = F10.7A = 70, Ap = 4
    pub fn solar_minimum() -> Self {
        Self {
            f107: 70.0,
            f107a: 70.0,
            ap: 4.0,
            ap_history: Some(ApHistory::quiet()),
        }
    }

    /// Active sun: F10.7 = 250, F10.7A = 240, Ap = 15
    pub fn solar_maximum() -> Self {
        Self {
            f107: 250.0,
            f107a: 240.0,
            ap: 15.0,
            ap_history: Some(ApHistory::quiet()),
        }
    }

    /// Moderate activity: F10.7 = F10.7A = 150, Ap = 7
    pub fn moderate() -> Self {
        Self {
            f107: 150.0,
            f107a: 150.0,
            ap: 7.0,
            ap_history: Some(ApHistory::quiet()),
        }
    }
}

impl Default for SpaceWeather {
    fn default() -> Self {
        Self::nominal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_ordered_by_activity() {
        let min = SpaceWeather::solar_minimum();
        let nominal = SpaceWeather::nominal();
        let max = SpaceWeather::solar_maximum();
        assert!(min.f107a < nominal.f107a);
        assert!(nominal.f107a < max.f107a);
        assert!(SpaceWeather::moderate().ap > nominal.ap);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"f107": 180.0, "f107a": 160.0, "ap": 12.0}"#;
        let weather: SpaceWeather =
            serde_json::from_str(json).expect("Partial deserialization failed");
        assert_eq!(weather.f107, 180.0);
        assert!(weather.ap_history.is_none());
    }
}
