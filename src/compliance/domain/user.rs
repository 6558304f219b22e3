use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Access role attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Compliance Manager")]
    ComplianceManager,
    Auditor,
    Employee,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::ComplianceManager => write!(f, "Compliance Manager"),
            Role::Auditor => write!(f, "Auditor"),
            Role::Employee => write!(f, "Employee"),
        }
    }
}
