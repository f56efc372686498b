//! Open-rental ledger keyed by car id.
//!
//! # Responsibility
//! - Hold the open rental for each rented-out car.
//! - Drive availability transitions together with ledger entries.
//!
//! # Invariants
//! - At most one open rental exists per car id.
//! - A car's availability flag changes only together with its ledger entry.
//! - Closing looks the entry up first; an unmatched close changes nothing.

use crate::model::car::{Car, CarId};
use crate::model::customer::Customer;
use crate::model::rental::{ClosedRental, Rental};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ledger transition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    CarUnavailable(CarId),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CarUnavailable(id) => write!(f, "car is not available for rent: {id}"),
        }
    }
}

impl Error for LedgerError {}

/// Index of open rentals by car id.
#[derive(Debug, Default)]
pub struct RentalLedger {
    open_rentals: BTreeMap<CarId, Rental>,
}

impl RentalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a rental for an available car and flips it unavailable.
    ///
    /// # Errors
    /// - Returns `CarUnavailable` when the car is already rented out; the
    ///   car and the ledger are left unchanged.
    pub fn open_rental(
        &mut self,
        car: &mut Car,
        customer: Customer,
        start_date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if !car.is_available() {
            return Err(LedgerError::CarUnavailable(car.id.clone()));
        }
        car.mark_rented();
        let rental = Rental::new(car.id.clone(), customer, start_date);
        self.open_rentals.insert(car.id.clone(), rental);
        Ok(())
    }

    /// Closes the open rental for `car` and prices the elapsed days.
    ///
    /// The ledger entry is looked up before any state changes; when no open
    /// rental exists for the car, `None` is returned and the car's
    /// availability is left untouched.
    pub fn close_rental(&mut self, car: &mut Car, return_date: NaiveDate) -> Option<ClosedRental> {
        let mut rental = self.open_rentals.remove(&car.id)?;
        rental.close(return_date);
        let rental_days = rental.rental_days();
        let total_price = car.calculate_price(rental_days);
        car.mark_returned();
        Some(ClosedRental {
            customer: rental.customer,
            car: car.clone(),
            start_date: rental.start_date,
            return_date,
            rental_days,
            total_price,
        })
    }

    /// Returns the open rental for a car id.
    pub fn open_rental_for(&self, car_id: &str) -> Option<&Rental> {
        self.open_rentals.get(car_id.trim())
    }

    /// Returns the number of open rentals.
    pub fn open_count(&self) -> usize {
        self.open_rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_rentals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{LedgerError, RentalLedger};
    use crate::model::car::Car;
    use crate::model::customer::Customer;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
    }

    fn customer() -> Customer {
        Customer::new("CUS1", "Sam")
    }

    #[test]
    fn open_rental_flips_car_and_records_entry() {
        let mut ledger = RentalLedger::new();
        let mut car = Car::new("C001", "Toyota", "Camry", 60.0);

        ledger
            .open_rental(&mut car, customer(), date(2024, 1, 1))
            .expect("rental should open");

        assert!(!car.is_available());
        assert_eq!(ledger.open_count(), 1);
        let rental = ledger
            .open_rental_for("C001")
            .expect("open rental should be recorded");
        assert!(rental.is_open());
        assert_eq!(rental.customer.id, "CUS1");
    }

    #[test]
    fn open_rental_rejects_unavailable_car() {
        let mut ledger = RentalLedger::new();
        let mut car = Car::new("C001", "Toyota", "Camry", 60.0);
        car.mark_rented();

        let rejected = ledger.open_rental(&mut car, customer(), date(2024, 1, 1));
        assert!(matches!(rejected, Err(LedgerError::CarUnavailable(_))));
        assert!(ledger.is_empty());
        assert!(!car.is_available());
    }

    #[test]
    fn close_rental_prices_days_and_frees_car() {
        let mut ledger = RentalLedger::new();
        let mut car = Car::new("C001", "Toyota", "Camry", 60.0);
        ledger
            .open_rental(&mut car, customer(), date(2024, 1, 1))
            .expect("rental should open");

        let summary = ledger
            .close_rental(&mut car, date(2024, 1, 5))
            .expect("rental should close");

        assert_eq!(summary.rental_days, 4);
        assert_eq!(summary.total_price, 240.0);
        assert_eq!(summary.customer.name, "Sam");
        assert!(car.is_available());
        assert!(ledger.is_empty());
    }

    #[test]
    fn close_rental_clamps_reversed_dates_to_zero() {
        let mut ledger = RentalLedger::new();
        let mut car = Car::new("C001", "Toyota", "Camry", 60.0);
        ledger
            .open_rental(&mut car, customer(), date(2024, 1, 5))
            .expect("rental should open");

        let summary = ledger
            .close_rental(&mut car, date(2024, 1, 1))
            .expect("rental should close");

        assert_eq!(summary.rental_days, 0);
        assert_eq!(summary.total_price, 0.0);
    }

    #[test]
    fn unmatched_close_leaves_availability_untouched() {
        let mut ledger = RentalLedger::new();
        let mut car = Car::new("C001", "Toyota", "Camry", 60.0);
        car.mark_rented();

        assert!(ledger.close_rental(&mut car, date(2024, 1, 5)).is_none());
        assert!(!car.is_available());
    }
}
