//! Customer domain model.

/// Sequential identifier issued by the customer registry.
pub type CustomerId = String;

/// Customer record captured at rent time.
///
/// Names are stored verbatim; repeated names produce distinct customers with
/// distinct ids. Records are immutable once created and never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Registry-issued id, `CUS` followed by a sequence number.
    pub id: CustomerId,
    /// Name exactly as entered at the desk.
    pub name: String,
}

impl Customer {
    /// Creates a customer record with a registry-issued id.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
