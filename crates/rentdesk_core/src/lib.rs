//! Core domain logic for the rental desk.
//! This crate is the single source of truth for business invariants.

pub mod audit;
pub mod dates;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use audit::{
    AuditError, AuditEvent, AuditSink, FileAuditSink, MemoryAuditSink, AUDIT_LOG_FILE_NAME,
};
pub use dates::{days_between, format_desk_date, parse_desk_date, DateParseError, DATE_PATTERN};
pub use ledger::{LedgerError, RentalLedger};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::car::{Car, CarId, CarValidationError};
pub use model::customer::{Customer, CustomerId};
pub use model::rental::{ClosedRental, Rental};
pub use registry::customers::{CustomerRegistry, CUSTOMER_ID_PREFIX};
pub use registry::fleet::{FleetError, FleetRegistry};
pub use service::desk::{DeskError, RentOutcome, RentalDesk, ReturnOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
