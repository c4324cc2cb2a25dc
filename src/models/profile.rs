//! Caller-supplied product and route configuration.
//!
//! The core reads no files; these structs are handed over by the external
//! configuration store (typically as JSON) and checked with
//! [`crate::validation::validate_profile`] before use.

use serde::{Deserialize, Serialize};

use crate::decay::Nuclide;
use crate::error::CoreResult;

/// Per-product production parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Product name (e.g. `"FDG"`).
    pub name: String,
    /// Radionuclide symbol (informational, e.g. `"F-18"`).
    #[serde(default)]
    pub nuclide: String,
    /// Physical half-life of the radionuclide (min).
    pub half_life_minutes: f64,
    /// Extra activity produced to cover handling and QC losses (%).
    #[serde(default)]
    pub overage_percent: f64,
    /// Shelf life counted from end of synthesis (min). `None` = unlimited.
    #[serde(default)]
    pub shelf_life_minutes: Option<f64>,
    /// Synthesis duration (min).
    pub synthesis_minutes: f64,
    /// QC duration (min).
    pub qc_minutes: f64,
    /// Packaging duration (min).
    pub packaging_minutes: f64,
}

impl ProductProfile {
    /// Creates a profile for a catalogued or custom nuclide with zero
    /// stage durations and no overage.
    pub fn new(name: impl Into<String>, nuclide: &Nuclide) -> Self {
        Self {
            name: name.into(),
            nuclide: nuclide.symbol.clone(),
            half_life_minutes: nuclide.half_life_minutes(),
            overage_percent: 0.0,
            shelf_life_minutes: None,
            synthesis_minutes: 0.0,
            qc_minutes: 0.0,
            packaging_minutes: 0.0,
        }
    }

    /// Sets the overage allowance (%).
    pub fn with_overage(mut self, percent: f64) -> Self {
        self.overage_percent = percent;
        self
    }

    /// Sets the shelf life (min).
    pub fn with_shelf_life(mut self, minutes: f64) -> Self {
        self.shelf_life_minutes = Some(minutes);
        self
    }

    /// Sets the in-house stage durations (min).
    pub fn with_stages(mut self, synthesis: f64, qc: f64, packaging: f64) -> Self {
        self.synthesis_minutes = synthesis;
        self.qc_minutes = qc;
        self.packaging_minutes = packaging;
        self
    }

    /// The profile's nuclide as a validated [`Nuclide`].
    pub fn nuclide(&self) -> CoreResult<Nuclide> {
        Nuclide::custom(self.nuclide.clone(), self.half_life_minutes)
    }
}

/// A delivery route from the production site to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRoute {
    /// Route or destination name.
    pub name: String,
    /// Door-to-door travel time (min).
    pub travel_minutes: f64,
}

impl DeliveryRoute {
    /// Creates a route.
    pub fn new(name: impl Into<String>, travel_minutes: f64) -> Self {
        Self {
            name: name.into(),
            travel_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = ProductProfile::new("FDG", &Nuclide::f18())
            .with_overage(10.0)
            .with_shelf_life(600.0)
            .with_stages(90.0, 45.0, 20.0);
        assert_eq!(p.nuclide, "F-18");
        assert_eq!(p.shelf_life_minutes, Some(600.0));
        assert_eq!(p.nuclide().unwrap(), Nuclide::f18());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "name": "Choline",
            "half_life_minutes": 20.38,
            "synthesis_minutes": 35,
            "qc_minutes": 15,
            "packaging_minutes": 10
        }"#;
        let p: ProductProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.overage_percent, 0.0);
        assert!(p.shelf_life_minutes.is_none());
        assert!(p.nuclide.is_empty());

        let r: DeliveryRoute =
            serde_json::from_str(r#"{"name":"City Hospital","travel_minutes":42.5}"#).unwrap();
        assert_eq!(r, DeliveryRoute::new("City Hospital", 42.5));
    }
}
