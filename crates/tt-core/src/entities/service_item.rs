use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A billable service with an hourly rate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: String,
    pub rate: Money,
    pub qbo_id: Option<String>,
}
