//! In-memory fleet registry and availability views.

use crate::model::car::{Car, CarId, CarValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fleet registration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum FleetError {
    Validation(CarValidationError),
    DuplicateCarId(CarId),
}

impl Display for FleetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateCarId(id) => write!(f, "car id already registered: {id}"),
        }
    }
}

impl Error for FleetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateCarId(_) => None,
        }
    }
}

impl From<CarValidationError> for FleetError {
    fn from(value: CarValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Registration-ordered car store.
#[derive(Debug, Default)]
pub struct FleetRegistry {
    cars: Vec<Car>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one car after validating it.
    ///
    /// The id is trimmed before validation and duplicate detection, so the
    /// stored spelling always matches what lookups normalize to. The first
    /// registration of an id wins; later cars with the same id are rejected
    /// without touching the stored record.
    pub fn add(&mut self, mut car: Car) -> Result<(), FleetError> {
        car.id = car.id.trim().to_string();
        car.validate()?;
        if self.find_by_id(&car.id).is_some() {
            return Err(FleetError::DuplicateCarId(car.id));
        }
        self.cars.push(car);
        Ok(())
    }

    /// Returns one car by id.
    pub fn find_by_id(&self, car_id: &str) -> Option<&Car> {
        let normalized = car_id.trim();
        self.cars.iter().find(|car| car.id == normalized)
    }

    pub(crate) fn find_by_id_mut(&mut self, car_id: &str) -> Option<&mut Car> {
        let normalized = car_id.trim();
        self.cars.iter_mut().find(|car| car.id == normalized)
    }

    /// Returns cars open for rent, in registration order.
    pub fn list_available(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| car.is_available()).collect()
    }

    /// Returns rented-out cars, in registration order.
    pub fn list_unavailable(&self) -> Vec<&Car> {
        self.cars.iter().filter(|car| !car.is_available()).collect()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
