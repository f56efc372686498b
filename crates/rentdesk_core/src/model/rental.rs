//! Rental record and priced return summary.
//!
//! # Responsibility
//! - Associate one car, one customer, and the rental period.
//! - Derive the billable day count from the recorded dates.
//!
//! # Invariants
//! - `return_date` is `None` exactly while the rental is open.
//! - `rental_days()` never goes below zero, even for reversed dates.

use crate::dates::days_between;
use crate::model::car::{Car, CarId};
use crate::model::customer::Customer;
use chrono::NaiveDate;

/// One rental agreement, open until a return date is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    /// Id of the rented car; the ledger key.
    pub car_id: CarId,
    /// Snapshot of the customer who took the car.
    pub customer: Customer,
    /// First day of the rental period.
    pub start_date: NaiveDate,
    /// Recorded at return time; `None` while the rental is open.
    pub return_date: Option<NaiveDate>,
}

impl Rental {
    /// Opens a rental starting on `start_date`.
    pub fn new(car_id: impl Into<CarId>, customer: Customer, start_date: NaiveDate) -> Self {
        Self {
            car_id: car_id.into(),
            customer,
            start_date,
            return_date: None,
        }
    }

    /// Records the return date, closing the rental.
    pub fn close(&mut self, return_date: NaiveDate) {
        self.return_date = Some(return_date);
    }

    /// Returns whether the car is still out.
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// Whole calendar days between start and return.
    ///
    /// Zero while the rental is open and zero when the recorded return date
    /// precedes the start date.
    pub fn rental_days(&self) -> u32 {
        match self.return_date {
            Some(return_date) => days_between(self.start_date, return_date),
            None => 0,
        }
    }
}

/// Priced summary produced when a rental closes.
///
/// Closed rentals are not retained by the ledger; this value and the audit
/// trail are the only records of a completed rental.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedRental {
    /// Customer who held the rental.
    pub customer: Customer,
    /// Car state after the return.
    pub car: Car,
    /// First day of the rental period.
    pub start_date: NaiveDate,
    /// Day the car came back.
    pub return_date: NaiveDate,
    /// Billable whole days, clamped at zero.
    pub rental_days: u32,
    /// `rental_days` priced at the car's flat per-day rate.
    pub total_price: f64,
}
