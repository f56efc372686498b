//! Rental desk orchestration.
//!
//! # Responsibility
//! - Coordinate fleet, customers, ledger, and audit sink for rent and return.
//! - Express business rejections as outcome variants, never as errors.
//!
//! # Invariants
//! - Rejected operations leave registries, ledger, and audit trail untouched.
//! - Audit sink failures never roll back a completed transition.
//! - Unknown car ids are caller-contract violations, not outcomes.

use crate::audit::{AuditEvent, AuditSink};
use crate::dates::format_desk_date;
use crate::ledger::{LedgerError, RentalLedger};
use crate::model::car::{Car, CarId};
use crate::model::customer::Customer;
use crate::model::rental::{ClosedRental, Rental};
use crate::registry::customers::CustomerRegistry;
use crate::registry::fleet::{FleetError, FleetRegistry};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a rent request for a known car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentOutcome {
    /// Rental opened; the issued customer record is returned.
    Rented(Customer),
    /// The car is already rented out; nothing changed.
    Unavailable,
}

/// Outcome of a return request for a known car.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnOutcome {
    /// Rental closed; the priced summary is returned.
    Returned(ClosedRental),
    /// No open rental exists for the car; nothing changed.
    NotRented,
}

/// Caller-contract violations for desk operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DeskError {
    /// The car id does not exist in the fleet.
    UnknownCar(CarId),
    /// Fleet registration failed.
    Fleet(FleetError),
}

impl Display for DeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCar(id) => write!(f, "car not found: {id}"),
            Self::Fleet(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DeskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownCar(_) => None,
            Self::Fleet(err) => Some(err),
        }
    }
}

impl From<FleetError> for DeskError {
    fn from(value: FleetError) -> Self {
        Self::Fleet(value)
    }
}

/// Single-location rental desk over in-memory registries.
///
/// Owns every collaborator exclusively; all fleet, customer, and ledger
/// mutations flow through this type.
pub struct RentalDesk<S: AuditSink> {
    fleet: FleetRegistry,
    customers: CustomerRegistry,
    ledger: RentalLedger,
    audit_sink: S,
}

impl<S: AuditSink> RentalDesk<S> {
    /// Creates an empty desk writing audit lines to `audit_sink`.
    pub fn new(audit_sink: S) -> Self {
        Self {
            fleet: FleetRegistry::new(),
            customers: CustomerRegistry::new(),
            ledger: RentalLedger::new(),
            audit_sink,
        }
    }

    /// Registers one car in the fleet.
    pub fn add_car(&mut self, car: Car) -> Result<(), DeskError> {
        let car_id = car.id.clone();
        self.fleet.add(car)?;
        info!("event=car_added module=desk status=ok car_id={car_id}");
        Ok(())
    }

    /// Opens a rental for `car_id` under a newly registered customer.
    ///
    /// # Contract
    /// - `Unavailable` is a business outcome: no customer id is consumed and
    ///   no audit line is written.
    ///
    /// # Errors
    /// - Returns `UnknownCar` when the id is not in the fleet; no state
    ///   changes.
    pub fn rent_car(
        &mut self,
        car_id: &str,
        customer_name: &str,
        start_date: NaiveDate,
    ) -> Result<RentOutcome, DeskError> {
        let Some(car) = self.fleet.find_by_id_mut(car_id) else {
            return Err(DeskError::UnknownCar(car_id.trim().to_string()));
        };
        if !car.is_available() {
            info!(
                "event=rent_rejected module=desk status=unavailable car_id={}",
                car.id
            );
            return Ok(RentOutcome::Unavailable);
        }

        let customer = self.customers.create(customer_name);
        match self.ledger.open_rental(car, customer.clone(), start_date) {
            Ok(()) => {}
            Err(LedgerError::CarUnavailable(_)) => return Ok(RentOutcome::Unavailable),
        }

        let event = AuditEvent::rented(&customer, car, start_date);
        info!(
            "event=car_rented module=desk status=ok car_id={} customer_id={} start_date={}",
            car.id,
            customer.id,
            format_desk_date(start_date)
        );
        self.record_audit(&event);
        Ok(RentOutcome::Rented(customer))
    }

    /// Closes the open rental for `car_id` and prices the elapsed days.
    ///
    /// # Contract
    /// - `NotRented` is a business outcome: availability is left untouched
    ///   and no audit line is written.
    ///
    /// # Errors
    /// - Returns `UnknownCar` when the id is not in the fleet; no state
    ///   changes.
    pub fn return_car(
        &mut self,
        car_id: &str,
        return_date: NaiveDate,
    ) -> Result<ReturnOutcome, DeskError> {
        let Some(car) = self.fleet.find_by_id_mut(car_id) else {
            return Err(DeskError::UnknownCar(car_id.trim().to_string()));
        };
        let Some(summary) = self.ledger.close_rental(car, return_date) else {
            info!(
                "event=return_rejected module=desk status=not_rented car_id={}",
                car_id.trim()
            );
            return Ok(ReturnOutcome::NotRented);
        };

        let event = AuditEvent::returned(&summary);
        info!(
            "event=car_returned module=desk status=ok car_id={} customer_id={} rental_days={} total_price={:.2}",
            summary.car.id,
            summary.customer.id,
            summary.rental_days,
            summary.total_price
        );
        self.record_audit(&event);
        Ok(ReturnOutcome::Returned(summary))
    }

    /// Returns one fleet car by id.
    pub fn find_car(&self, car_id: &str) -> Option<&Car> {
        self.fleet.find_by_id(car_id)
    }

    /// Returns cars open for rent, in registration order.
    pub fn available_cars(&self) -> Vec<&Car> {
        self.fleet.list_available()
    }

    /// Returns rented-out cars, in registration order.
    pub fn unavailable_cars(&self) -> Vec<&Car> {
        self.fleet.list_unavailable()
    }

    /// Returns the number of registered cars.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Returns the open rental for a car id.
    pub fn open_rental(&self, car_id: &str) -> Option<&Rental> {
        self.ledger.open_rental_for(car_id)
    }

    /// Returns the number of open rentals.
    pub fn open_rental_count(&self) -> usize {
        self.ledger.open_count()
    }

    /// Returns the number of customers registered so far.
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Returns the audit sink for inspection.
    pub fn audit_sink(&self) -> &S {
        &self.audit_sink
    }

    fn record_audit(&mut self, event: &AuditEvent) {
        if let Err(err) = self.audit_sink.append(&event.to_string()) {
            warn!("event=audit_append module=desk status=error error={err}");
        }
    }
}
