//! Effect switches
//!
//! NRLMSISE-00 exposes 24 switches that turn individual groups of terms on or
//! off. Each slot holds one of:
//!
//! - `0`: the effect is off
//! - `1`: the effect is on
//! - `2`: main effects off, cross terms on
//!
//! Slot 9 ([`Effect::DailyAp`]) additionally accepts `-1`, which selects the
//! seven-element Ap history instead of the scalar daily Ap.
//!
//! Two multiplier arrays are derived from the raw values when a [`Switches`]
//! is built: `main` is `1` only where the slot is exactly `1`, and `cross` is
//! `1` wherever the slot is positive. Slot 9 copies its raw value into both.

use crate::errors::{MsisError, MsisResult};
use serde::{Deserialize, Serialize};

/// Number of switch slots.
pub const SWITCH_COUNT: usize = 24;

/// Named switch slots, in positional order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Legacy unit selection. Retained for positional compatibility; ignored.
    Units = 0,
    /// F10.7 effect on the mean
    F107 = 1,
    /// Time-independent terms
    TimeIndependent = 2,
    /// Symmetrical annual
    SymmetricalAnnual = 3,
    /// Symmetrical semiannual
    SymmetricalSemiannual = 4,
    /// Asymmetrical annual
    AsymmetricalAnnual = 5,
    /// Asymmetrical semiannual
    AsymmetricalSemiannual = 6,
    /// Diurnal
    Diurnal = 7,
    /// Semidiurnal
    Semidiurnal = 8,
    /// Daily Ap, or the Ap history when set to `-1`
    DailyAp = 9,
    /// All UT/longitude effects
    AllUtLongitude = 10,
    /// Longitudinal
    Longitudinal = 11,
    /// UT and mixed UT/longitude
    UtMixedLongitude = 12,
    /// Mixed Ap/UT/longitude
    MixedApUtLongitude = 13,
    /// Terdiurnal
    Terdiurnal = 14,
    /// Departures from diffusive equilibrium
    DiffusiveDepartures = 15,
    /// All exospheric temperature variations
    ExosphericTemperature = 16,
    /// All lower-boundary temperature variations
    LowerBoundaryTemperature = 17,
    /// All lower-thermosphere node temperature variations
    LowerThermosphereNodes = 18,
    /// All temperature-gradient shape variations
    TemperatureGradient = 19,
    /// All middle-atmosphere node temperature variations
    MiddleAtmosphereNodes = 20,
    /// All lower-boundary density variations
    LowerBoundaryDensity = 21,
    /// All lower-atmosphere node temperature variations
    LowerAtmosphereNodes = 22,
    /// Turbopause scale height variations
    TurbopauseScaleHeight = 23,
}

impl Effect {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Geomagnetic activity source selected by [`Effect::DailyAp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeomagneticMode {
    /// Geomagnetic terms disabled
    Off,
    /// Scalar daily Ap
    Daily,
    /// Seven-element Ap history
    History,
}

/// A validated 24-slot switch vector with its derived multipliers.
///
/// # Examples
///
/// ```rust
/// use rsmsis_core::switches::{Effect, Switches};
///
/// let switches = Switches::standard().with(Effect::DailyAp, -1).unwrap();
/// assert!(switches.uses_ap_history());
/// assert_eq!(switches.main(Effect::Diurnal), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Switches {
    raw: [i32; SWITCH_COUNT],
    main: [f64; SWITCH_COUNT],
    cross: [f64; SWITCH_COUNT],
}

impl Switches {
    /// Build switches from raw slot values.
    ///
    /// Fails with [`MsisError::InvalidSwitch`] if a slot is outside `{0, 1, 2}`
    /// (`{-1, 0, 1, 2}` for slot 9).
    pub fn new(raw: [i32; SWITCH_COUNT]) -> MsisResult<Self> {
        for (index, &value) in raw.iter().enumerate() {
            let valid = match index {
                9 => (-1..=2).contains(&value),
                _ => (0..=2).contains(&value),
            };
            if !valid {
                return Err(MsisError::InvalidSwitch { index, value });
            }
        }

        Ok(Self::derive(raw))
    }

    fn derive(raw: [i32; SWITCH_COUNT]) -> Self {
        let mut main = [0.0; SWITCH_COUNT];
        let mut cross = [0.0; SWITCH_COUNT];
        for (i, &value) in raw.iter().enumerate() {
            if i == Effect::DailyAp.index() {
                main[i] = value as f64;
                cross[i] = value as f64;
            } else {
                main[i] = if value == 1 { 1.0 } else { 0.0 };
                cross[i] = if value > 0 { 1.0 } else { 0.0 };
            }
        }

        Self { raw, main, cross }
    }

    /// Standard configuration: slot 0 off, every other slot on.
    pub fn standard() -> Self {
        let mut raw = [1; SWITCH_COUNT];
        raw[0] = 0;
        Self::derive(raw)
    }

    /// All slots off.
    pub fn all_off() -> Self {
        Self::derive([0; SWITCH_COUNT])
    }

    /// Return a copy with one slot replaced.
    pub fn with(&self, effect: Effect, value: i32) -> MsisResult<Self> {
        let mut raw = self.raw;
        raw[effect.index()] = value;
        Self::new(raw)
    }

    /// Raw slot value
    pub fn raw(&self, effect: Effect) -> i32 {
        self.raw[effect.index()]
    }

    /// Raw slot values in positional order
    pub fn as_array(&self) -> &[i32; SWITCH_COUNT] {
        &self.raw
    }

    /// Main-effect multiplier (`sw` in the published model)
    pub fn main(&self, effect: Effect) -> f64 {
        self.main[effect.index()]
    }

    /// Cross-term multiplier (`swc` in the published model)
    pub fn cross(&self, effect: Effect) -> f64 {
        self.cross[effect.index()]
    }

    /// Main-effect multipliers by slot index
    pub fn main_multipliers(&self) -> &[f64; SWITCH_COUNT] {
        &self.main
    }

    /// Cross-term multipliers by slot index
    pub fn cross_multipliers(&self) -> &[f64; SWITCH_COUNT] {
        &self.cross
    }

    pub fn geomagnetic_mode(&self) -> GeomagneticMode {
        match self.raw[Effect::DailyAp.index()] {
            -1 => GeomagneticMode::History,
            0 => GeomagneticMode::Off,
            _ => GeomagneticMode::Daily,
        }
    }

    pub fn uses_ap_history(&self) -> bool {
        self.geomagnetic_mode() == GeomagneticMode::History
    }
}

impl Default for Switches {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<i32>> for Switches {
    type Error = MsisError;

    fn try_from(values: Vec<i32>) -> MsisResult<Self> {
        let raw: [i32; SWITCH_COUNT] = values
            .as_slice()
            .try_into()
            .map_err(|_| MsisError::WrongSwitchCount(values.len()))?;
        Self::new(raw)
    }
}

impl From<Switches> for Vec<i32> {
    fn from(switches: Switches) -> Self {
        switches.raw.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_switches() {
        let switches = Switches::standard();
        assert_eq!(switches.raw(Effect::Units), 0);
        for i in 1..SWITCH_COUNT {
            assert_eq!(switches.as_array()[i], 1);
        }
        assert_eq!(switches.geomagnetic_mode(), GeomagneticMode::Daily);
    }

    #[test]
    fn test_cross_terms_only() {
        let switches = Switches::standard()
            .with(Effect::AsymmetricalAnnual, 2)
            .unwrap();
        assert_eq!(switches.main(Effect::AsymmetricalAnnual), 0.0);
        assert_eq!(switches.cross(Effect::AsymmetricalAnnual), 1.0);
    }

    #[test]
    fn test_off_slot_has_zero_multipliers() {
        let switches = Switches::standard().with(Effect::Diurnal, 0).unwrap();
        assert_eq!(switches.main(Effect::Diurnal), 0.0);
        assert_eq!(switches.cross(Effect::Diurnal), 0.0);
    }

    #[test]
    fn test_ap_history_slot_copies_raw_value() {
        let switches = Switches::standard().with(Effect::DailyAp, -1).unwrap();
        assert_eq!(switches.main(Effect::DailyAp), -1.0);
        assert_eq!(switches.cross(Effect::DailyAp), -1.0);
        assert!(switches.uses_ap_history());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Switches::standard().with(Effect::Diurnal, 3).unwrap_err();
        assert_eq!(err, MsisError::InvalidSwitch { index: 7, value: 3 });

        let err = Switches::standard().with(Effect::Diurnal, -1).unwrap_err();
        assert_eq!(err, MsisError::InvalidSwitch { index: 7, value: -1 });
    }

    #[test]
    fn test_units_slot_does_not_matter() {
        let a = Switches::standard();
        let b = Switches::standard().with(Effect::Units, 1).unwrap();
        assert_eq!(a.main_multipliers()[1..], b.main_multipliers()[1..]);
    }

    #[test]
    fn test_round_trip_json() {
        let switches = Switches::standard().with(Effect::DailyAp, -1).unwrap();
        let json = serde_json::to_string(&switches).unwrap();
        let parsed: Switches = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, switches);
    }

    #[test]
    fn test_deserialise_rejects_wrong_length() {
        let result: Result<Switches, _> = serde_json::from_str("[1, 1, 1]");
        assert!(result.is_err());
    }
}
