//! Model input
//!
//! UT, local solar time and longitude are used independently by the model and
//! are not of equal importance in every situation. For the most physically
//! realistic result they should be consistent:
//!
//! $$ lst = \frac{sec}{3600} + \frac{\lambda_{deg}}{15} $$
//!
//! [`MsisInput::from_epoch_position`] derives `lst` that way. F10.7, F10.7A and
//! Ap effects are neither large nor well established below 80 km; use 150, 150
//! and 4 there.

use crate::constants::RAD_TO_DEG;
use crate::space_weather::SpaceWeather;
use serde::{Deserialize, Serialize};

/// Ap history used when switch 9 is set to `-1`.
///
/// Slots, in order:
///
/// 0. daily Ap
/// 1. 3-hour Ap index for the current time
/// 2. 3-hour Ap index 3 hours before the current time
/// 3. 3-hour Ap index 6 hours before the current time
/// 4. 3-hour Ap index 9 hours before the current time
/// 5. average of eight 3-hour Ap indices from 12 to 33 hours prior
/// 6. average of eight 3-hour Ap indices from 36 to 57 hours prior
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApHistory(pub [f64; 7]);

impl ApHistory {
    pub fn new(values: [f64; 7]) -> Self {
        Self(values)
    }

    /// Every slot set to the same index
    pub fn constant(ap: f64) -> Self {
        Self([ap; 7])
    }

    /// Quiet geomagnetic conditions (Ap = 4 throughout)
    pub fn quiet() -> Self {
        Self::constant(4.0)
    }

    pub fn values(&self) -> &[f64; 7] {
        &self.0
    }
}

impl Default for ApHistory {
    fn default() -> Self {
        Self::quiet()
    }
}

/// Input to the model, in SI units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MsisInput {
    /// Year. Informational only; the model ignores it.
    pub year: i32,
    /// Day of year (1-366)
    pub doy: i32,
    /// Seconds in day (UT)
    pub sec: f64,
    /// Altitude
    /// unit: m
    pub alt: f64,
    /// Geodetic latitude
    /// unit: rad
    pub g_lat: f64,
    /// Geodetic longitude. Values at or below
    /// [`LONGITUDE_DISABLED`](crate::constants::LONGITUDE_DISABLED) disable
    /// longitude-dependent terms.
    /// unit: rad
    pub g_long: f64,
    /// Local apparent solar time
    /// unit: hours
    pub lst: f64,
    /// 81-day average of F10.7 flux, centred on `doy`
    pub f107a: f64,
    /// Daily F10.7 flux for the previous day
    pub f107: f64,
    /// Daily magnetic index
    pub ap: f64,
    /// Ap history, required when switch 9 is `-1`
    pub ap_history: Option<ApHistory>,
}

impl Default for MsisInput {
    fn default() -> Self {
        Self {
            year: 0,
            doy: 172,
            sec: 29000.0,
            alt: 400_000.0,
            g_lat: 60.0 / RAD_TO_DEG,
            g_long: -70.0 / RAD_TO_DEG,
            lst: 16.0,
            f107a: 150.0,
            f107: 150.0,
            ap: 4.0,
            ap_history: None,
        }
    }
}

impl MsisInput {
    /// Build an input from UT and a geodetic position, deriving local solar
    /// time from longitude.
    pub fn from_epoch_position(
        year: i32,
        doy: i32,
        sec: f64,
        alt: f64,
        g_lat: f64,
        g_long: f64,
        space_weather: &SpaceWeather,
    ) -> Self {
        Self {
            year,
            doy,
            sec,
            alt,
            g_lat,
            g_long,
            lst: local_solar_time(sec, g_long),
            ..Self::default()
        }
        .with_space_weather(space_weather)
    }

    pub fn with_altitude(self, alt: f64) -> Self {
        Self { alt, ..self }
    }

    pub fn with_latitude(self, g_lat: f64) -> Self {
        Self { g_lat, ..self }
    }

    pub fn with_longitude(self, g_long: f64) -> Self {
        Self { g_long, ..self }
    }

    pub fn with_local_solar_time(self, lst: f64) -> Self {
        Self { lst, ..self }
    }

    pub fn with_day(self, doy: i32, sec: f64) -> Self {
        Self { doy, sec, ..self }
    }

    pub fn with_solar_flux(self, f107: f64, f107a: f64) -> Self {
        Self { f107, f107a, ..self }
    }

    pub fn with_ap(self, ap: f64) -> Self {
        Self { ap, ..self }
    }

    pub fn with_ap_history(self, history: ApHistory) -> Self {
        Self {
            ap_history: Some(history),
            ..self
        }
    }

    pub fn with_space_weather(self, space_weather: &SpaceWeather) -> Self {
        Self {
            f107: space_weather.f107,
            f107a: space_weather.f107a,
            ap: space_weather.ap,
            ap_history: space_weather.ap_history,
            ..self
        }
    }
}

/// Local solar time in hours from UT seconds and longitude in radians,
/// wrapped into `[0, 24)`.
pub fn local_solar_time(sec: f64, g_long: f64) -> f64 {
    (sec / 3600.0 + g_long * RAD_TO_DEG / 15.0).rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_local_solar_time_wraps() {
        // 02:00 UT at 70°W is 21:20 local
        let lst = local_solar_time(7200.0, -70.0 / RAD_TO_DEG);
        assert!(is_close!(lst, 2.0 - 70.0 / 15.0 + 24.0), "got {}", lst);

        // 23:00 UT at 30°E is 01:00 local
        let lst = local_solar_time(23.0 * 3600.0, 30.0 / RAD_TO_DEG);
        assert!(is_close!(lst, 1.0), "got {}", lst);
    }

    #[test]
    fn test_with_builders_do_not_touch_other_fields() {
        let base = MsisInput::default();
        let moved = base.with_altitude(100_000.0);
        assert_eq!(moved.alt, 100_000.0);
        assert_eq!(moved.doy, base.doy);
        assert_eq!(base.alt, 400_000.0);
    }

    #[test]
    fn test_from_epoch_position_copies_space_weather() {
        let weather = SpaceWeather::solar_maximum();
        let input = MsisInput::from_epoch_position(2024, 10, 43200.0, 0.0, 0.0, 0.0, &weather);
        assert_eq!(input.f107, 250.0);
        assert_eq!(input.f107a, 240.0);
        assert_eq!(input.ap, 15.0);
        assert!(is_close!(input.lst, 12.0));
    }
}
