use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Time spent by an employee on a service for a customer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeActivity {
    pub id: String,
    pub company_id: String,
    pub employee_id: String,
    pub customer_id: String,
    pub service_item_id: String,
    pub activity_date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
    pub description: Option<String>,
    pub billable: bool,
    pub qbo_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeActivity {
    /// Total duration in minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}
