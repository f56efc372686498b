//! Customer registry with sequential id issuance.

use crate::model::customer::{Customer, CustomerId};

/// Prefix of every registry-issued customer id.
pub const CUSTOMER_ID_PREFIX: &str = "CUS";

/// Append-only customer store.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and stores a customer under the next sequential id.
    ///
    /// Ids are `CUS<n>` where `n` is the number of customers created so far
    /// plus one. Customers are never removed, so issued ids stay unique.
    pub fn create(&mut self, name: impl Into<String>) -> Customer {
        let id: CustomerId = format!("{}{}", CUSTOMER_ID_PREFIX, self.customers.len() + 1);
        let customer = Customer::new(id, name);
        self.customers.push(customer.clone());
        customer
    }

    /// Returns one customer by id.
    pub fn find_by_id(&self, customer_id: &str) -> Option<&Customer> {
        let normalized = customer_id.trim();
        self.customers.iter().find(|customer| customer.id == normalized)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
