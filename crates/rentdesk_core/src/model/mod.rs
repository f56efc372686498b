//! Domain records for the rental desk.
//!
//! # Responsibility
//! - Define the canonical car, customer, and rental shapes.
//! - Keep lifecycle transitions close to the data they guard.
//!
//! # Invariants
//! - Car availability is the source of truth for whether a rental may open.
//! - Customers and closed-rental summaries are immutable once produced.

pub mod car;
pub mod customer;
pub mod rental;
