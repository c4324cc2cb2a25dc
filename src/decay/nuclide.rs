//! Radionuclide catalogue.
//!
//! Half-lives are physical constants, so a [`Nuclide`] is immutable once
//! built. The catalogue covers the cyclotron and generator isotopes most
//! often scheduled for same-day delivery; anything else goes through
//! [`Nuclide::custom`].
//!
//! # Reference
//! NNDC / NuDat 3.0 half-life evaluations.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// (symbol, half-life in minutes)
const CATALOGUE: &[(&str, f64)] = &[
    ("F-18", 109.77),
    ("C-11", 20.38),
    ("N-13", 9.965),
    ("O-15", 2.037),
    ("Ga-68", 67.71),
    ("Cu-64", 762.0),
    ("Zr-89", 4704.0),
    ("Tc-99m", 360.36),
];

/// A radionuclide with its half-life.
///
/// Deserialization goes through [`Nuclide::custom`], so a record with a
/// non-positive half-life is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NuclideRecord")]
pub struct Nuclide {
    /// Symbol, e.g. `"F-18"`.
    pub symbol: String,
    /// Physical half-life (minutes).
    half_life_minutes: f64,
}

/// Unchecked wire form of [`Nuclide`].
#[derive(Deserialize)]
struct NuclideRecord {
    symbol: String,
    half_life_minutes: f64,
}

impl TryFrom<NuclideRecord> for Nuclide {
    type Error = CoreError;

    fn try_from(record: NuclideRecord) -> Result<Self, Self::Error> {
        Self::custom(record.symbol, record.half_life_minutes)
    }
}

impl Nuclide {
    /// Builds a nuclide outside the catalogue.
    ///
    /// # Errors
    /// [`CoreError::InvalidHalfLife`] when the half-life is not finite or is `<= 0`.
    pub fn custom(symbol: impl Into<String>, half_life_minutes: f64) -> CoreResult<Self> {
        super::decay_constant(half_life_minutes)?;
        Ok(Self {
            symbol: symbol.into(),
            half_life_minutes,
        })
    }

    /// Looks up a catalogued nuclide by symbol (case-insensitive).
    pub fn lookup(symbol: &str) -> Option<Self> {
        CATALOGUE
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
            .map(|&(s, hl)| Self {
                symbol: s.to_string(),
                half_life_minutes: hl,
            })
    }

    /// All catalogued nuclides.
    pub fn catalogue() -> Vec<Self> {
        CATALOGUE
            .iter()
            .map(|&(s, hl)| Self {
                symbol: s.to_string(),
                half_life_minutes: hl,
            })
            .collect()
    }

    /// Fluorine-18.
    pub fn f18() -> Self {
        Self::catalogued("F-18")
    }

    /// Carbon-11.
    pub fn c11() -> Self {
        Self::catalogued("C-11")
    }

    /// Gallium-68.
    pub fn ga68() -> Self {
        Self::catalogued("Ga-68")
    }

    /// Technetium-99m.
    pub fn tc99m() -> Self {
        Self::catalogued("Tc-99m")
    }

    fn catalogued(symbol: &str) -> Self {
        let hl = CATALOGUE
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, hl)| hl)
            .unwrap_or(f64::NAN);
        Self {
            symbol: symbol.to_string(),
            half_life_minutes: hl,
        }
    }

    /// Half-life (minutes).
    #[inline]
    pub fn half_life_minutes(&self) -> f64 {
        self.half_life_minutes
    }

    /// Decay constant (per minute).
    pub fn decay_constant(&self) -> CoreResult<f64> {
        super::decay_constant(self.half_life_minutes)
    }

    /// See [`super::decayed_activity`].
    pub fn decayed_activity(&self, initial_activity: f64, elapsed_minutes: f64) -> CoreResult<f64> {
        super::decayed_activity(initial_activity, self.half_life_minutes, elapsed_minutes)
    }

    /// See [`super::required_initial_activity`].
    pub fn required_initial_activity(
        &self,
        target_activity: f64,
        elapsed_minutes: f64,
    ) -> CoreResult<f64> {
        super::required_initial_activity(target_activity, self.half_life_minutes, elapsed_minutes)
    }
}

impl TryFrom<&str> for Nuclide {
    type Error = CoreError;

    /// Catalogue lookup; unknown symbols have no half-life to offer.
    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        Self::lookup(symbol).ok_or(CoreError::InvalidHalfLife {
            half_life_minutes: f64::NAN,
        })
    }
}
