//! Desk use-case services.
//!
//! # Responsibility
//! - Orchestrate registries, ledger, and audit sink into desk operations.
//! - Keep shell layers decoupled from storage and formatting details.

pub mod desk;
