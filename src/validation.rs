//! Up-front validation of caller-supplied product and route configuration.
//!
//! Checks configuration as a whole before any plan is computed, and reports
//! every problem found rather than stopping at the first. Detects:
//! - Duplicate product or route names
//! - Non-positive or non-finite half-lives
//! - Half-lives that disagree with the nuclide catalogue
//! - Negative overage percentages
//! - Negative stage or travel durations
//! - Non-positive shelf lives

use std::collections::HashSet;

use crate::decay::Nuclide;
use crate::models::{DeliveryRoute, ProductProfile};

/// Relative tolerance when comparing a profile half-life to the catalogue.
const HALF_LIFE_TOLERANCE: f64 = 0.01;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two products or two routes share a name.
    DuplicateName,
    /// Half-life is not finite or `<= 0`.
    InvalidHalfLife,
    /// Half-life differs from the catalogued value for the named nuclide.
    HalfLifeMismatch,
    /// Overage percent is negative or not finite.
    InvalidOverage,
    /// A stage or travel duration is negative or not finite.
    NegativeDuration,
    /// Shelf life is `<= 0` or not finite.
    InvalidShelfLife,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one product profile.
pub fn validate_profile(product: &ProductProfile) -> ValidationResult {
    let mut errors = Vec::new();
    check_profile(product, &mut errors);
    into_result(errors)
}

/// Validates one delivery route.
pub fn validate_route(route: &DeliveryRoute) -> ValidationResult {
    let mut errors = Vec::new();
    check_route(route, &mut errors);
    into_result(errors)
}

/// Validates a full configuration set.
///
/// Checks:
/// 1. No duplicate product names
/// 2. No duplicate route names
/// 3. Every product passes [`validate_profile`]
/// 4. Every route passes [`validate_route`]
pub fn validate_configuration(
    products: &[ProductProfile],
    routes: &[DeliveryRoute],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut product_names = HashSet::new();
    for p in products {
        if !product_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate product name: {}", p.name),
            ));
        }
        check_profile(p, &mut errors);
    }

    let mut route_names = HashSet::new();
    for r in routes {
        if !route_names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate route name: {}", r.name),
            ));
        }
        check_route(r, &mut errors);
    }

    into_result(errors)
}

fn check_profile(p: &ProductProfile, errors: &mut Vec<ValidationError>) {
    let hl = p.half_life_minutes;
    if !(hl.is_finite() && hl > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHalfLife,
            format!("Product '{}' has invalid half-life {hl} min", p.name),
        ));
    } else if let Some(known) = Nuclide::lookup(&p.nuclide) {
        let expected = known.half_life_minutes();
        if ((hl - expected) / expected).abs() > HALF_LIFE_TOLERANCE {
            errors.push(ValidationError::new(
                ValidationErrorKind::HalfLifeMismatch,
                format!(
                    "Product '{}' declares {} with half-life {hl} min (catalogue: {expected} min)",
                    p.name, known.symbol
                ),
            ));
        }
    }

    if !(p.overage_percent.is_finite() && p.overage_percent >= 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOverage,
            format!(
                "Product '{}' has invalid overage {}%",
                p.name, p.overage_percent
            ),
        ));
    }

    for (stage, minutes) in [
        ("synthesis", p.synthesis_minutes),
        ("qc", p.qc_minutes),
        ("packaging", p.packaging_minutes),
    ] {
        if !(minutes.is_finite() && minutes >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Product '{}' has invalid {stage} duration {minutes} min", p.name),
            ));
        }
    }

    if let Some(shelf) = p.shelf_life_minutes {
        if !(shelf.is_finite() && shelf > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidShelfLife,
                format!("Product '{}' has invalid shelf life {shelf} min", p.name),
            ));
        }
    }
}

fn check_route(r: &DeliveryRoute, errors: &mut Vec<ValidationError>) {
    if !(r.travel_minutes.is_finite() && r.travel_minutes >= 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            format!(
                "Route '{}' has invalid travel time {} min",
                r.name, r.travel_minutes
            ),
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
