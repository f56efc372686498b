//! Car domain model.
//!
//! # Responsibility
//! - Define the fleet record shared by registry, ledger, and desk layers.
//! - Provide availability transitions and flat per-day pricing.
//!
//! # Invariants
//! - `id` is stable; uniqueness across the fleet is enforced at registration
//!   time by `FleetRegistry::add`.
//! - `available` is the source of truth for whether a new rental may open.
//! - `base_price_per_day` is never negative once validated.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a fleet car.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CarId = String;

/// Validation errors for car records.
#[derive(Debug, Clone, PartialEq)]
pub enum CarValidationError {
    /// Car id is blank after trim.
    EmptyId,
    /// Per-day base price is below zero.
    NegativeBasePrice(f64),
}

impl Display for CarValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "car id must not be blank"),
            Self::NegativeBasePrice(value) => {
                write!(f, "base price per day must not be negative, got {value}")
            }
        }
    }
}

impl Error for CarValidationError {}

/// Canonical fleet record.
///
/// Cars are registered once and never deleted; rental state is expressed
/// through the `available` flag rather than through removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Stable fleet-unique id used for lookups and ledger keys.
    pub id: CarId,
    /// Manufacturer name shown in listings and audit lines.
    pub brand: String,
    /// Model name shown in listings and audit lines.
    pub model: String,
    /// Flat per-day rate; the only pricing input.
    pub base_price_per_day: f64,
    /// `true` while the car is on the lot and may be rented.
    pub available: bool,
}

impl Car {
    /// Creates a new car that starts available.
    pub fn new(
        id: impl Into<CarId>,
        brand: impl Into<String>,
        model: impl Into<String>,
        base_price_per_day: f64,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            base_price_per_day,
            available: true,
        }
    }

    /// Checks record-level invariants before registration.
    ///
    /// # Errors
    /// - Returns an error when the id is blank.
    /// - Returns an error when the base price is negative.
    pub fn validate(&self) -> Result<(), CarValidationError> {
        if self.id.trim().is_empty() {
            return Err(CarValidationError::EmptyId);
        }
        if self.base_price_per_day < 0.0 {
            return Err(CarValidationError::NegativeBasePrice(
                self.base_price_per_day,
            ));
        }
        Ok(())
    }

    /// Returns whether the car may be rented right now.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Flags the car as rented out.
    pub fn mark_rented(&mut self) {
        self.available = false;
    }

    /// Flags the car as back on the lot.
    pub fn mark_returned(&mut self) {
        self.available = true;
    }

    /// Prices a rental of `rental_days` whole days at the flat rate.
    ///
    /// Defined for every day count; zero days price to zero.
    pub fn calculate_price(&self, rental_days: u32) -> f64 {
        self.base_price_per_day * f64::from(rental_days)
    }
}
