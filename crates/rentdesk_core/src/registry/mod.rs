//! In-memory registries for the fleet and its customers.

pub mod customers;
pub mod fleet;
