use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,            // Unique ID, assigned by the server
    pub name: String,          // Full name
    pub email: String,         // Contact email
    pub phone: Option<String>, // Contact phone, may be absent
    pub created_at: String,    // Server-assigned creation timestamp
}

/// Fields for creating or replacing a customer. The id and creation
/// timestamp stay server-owned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
