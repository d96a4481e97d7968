use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer that time is billed to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub company_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub qbo_id: Option<String>,
}

impl Customer {
    /// Name shown in QBO, which requires a display name unique per realm.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
