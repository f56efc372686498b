//! Rental audit trail contracts and sinks.
//!
//! # Responsibility
//! - Render rental lifecycle events into their one-line trail format.
//! - Decouple event recording from the destination via `AuditSink`.
//!
//! # Invariants
//! - One event renders to exactly one line, dates in dd-MM-yyyy.
//! - Sinks report failure to the caller; the caller decides the recovery.

use crate::dates::format_desk_date;
use crate::model::car::Car;
use crate::model::customer::Customer;
use crate::model::rental::ClosedRental;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file_sink;

pub use file_sink::{FileAuditSink, AUDIT_LOG_FILE_NAME};

/// Audit sink write failure.
#[derive(Debug)]
pub enum AuditError {
    Io(std::io::Error),
}

impl Display for AuditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "audit write failed: {err}"),
        }
    }
}

impl Error for AuditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AuditError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Rental lifecycle event rendered into the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    /// A car left the lot.
    Rented {
        customer_name: String,
        brand: String,
        model: String,
        start_date: NaiveDate,
    },
    /// A car came back and the rental was priced.
    Returned {
        customer_name: String,
        brand: String,
        model: String,
        return_date: NaiveDate,
        rental_days: u32,
    },
}

impl AuditEvent {
    /// Builds the event for a newly opened rental.
    pub fn rented(customer: &Customer, car: &Car, start_date: NaiveDate) -> Self {
        Self::Rented {
            customer_name: customer.name.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            start_date,
        }
    }

    /// Builds the event for a priced return.
    pub fn returned(summary: &ClosedRental) -> Self {
        Self::Returned {
            customer_name: summary.customer.name.clone(),
            brand: summary.car.brand.clone(),
            model: summary.car.model.clone(),
            return_date: summary.return_date,
            rental_days: summary.rental_days,
        }
    }
}

impl Display for AuditEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rented {
                customer_name,
                brand,
                model,
                start_date,
            } => write!(
                f,
                "RENTED - {customer_name} rented {brand} {model} on {}",
                format_desk_date(*start_date)
            ),
            Self::Returned {
                customer_name,
                brand,
                model,
                return_date,
                rental_days,
            } => write!(
                f,
                "RETURNED - {customer_name} returned {brand} {model} on {} after {rental_days} days",
                format_desk_date(*return_date)
            ),
        }
    }
}

/// Destination for rendered audit lines.
pub trait AuditSink {
    /// Appends one rendered event line to the trail.
    fn append(&mut self, line: &str) -> Result<(), AuditError>;
}

/// In-memory sink for tests and embedding without filesystem access.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    lines: Vec<String>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns recorded lines in append order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&mut self, line: &str) -> Result<(), AuditError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
