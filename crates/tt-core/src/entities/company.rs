use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Customer, Employee, ServiceItem};

/// A company using the app. Owns employees, customers and service items.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Company {
    pub id: String,
    pub name: String,
    /// QBO realm (company) ID, set once the company is connected.
    pub qbo_realm_id: Option<String>,
    /// OAuth access token for the realm. Obtained outside this app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Whether the company has what the remote client needs to talk to QBO.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.qbo_realm_id.as_deref().is_some_and(|r| !r.is_empty())
            && self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// A company together with everything it owns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanyDetail {
    pub company: Company,
    pub employees: Vec<Employee>,
    pub customers: Vec<Customer>,
    pub service_items: Vec<ServiceItem>,
}
