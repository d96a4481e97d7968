//! CLI response types returned as JSON by `ttrack` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a single lookup-or-create against QBO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    /// The entity already had a remote ID; nothing was sent.
    AlreadySynced,
    /// A remote object with the same name existed and was adopted.
    Matched,
    /// A new remote object was created.
    Created,
}

/// Response from `ttrack sync <entity>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncResponse {
    pub entity_type: String,
    pub id: String,
    pub qbo_id: String,
    pub action: SyncAction,
}

/// Per-entity-type counters for a company-wide sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncCounts {
    pub created: u32,
    pub matched: u32,
    pub already_synced: u32,
}

impl SyncCounts {
    pub const fn record(&mut self, action: SyncAction) {
        match action {
            SyncAction::AlreadySynced => self.already_synced += 1,
            SyncAction::Matched => self.matched += 1,
            SyncAction::Created => self.created += 1,
        }
    }
}

/// Response from `ttrack sync company`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncReport {
    pub company_id: String,
    pub employees: SyncCounts,
    pub customers: SyncCounts,
    pub service_items: SyncCounts,
}

/// Response from `ttrack status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub app_info_loaded: bool,
    pub companies: u64,
    pub connected_companies: u64,
    pub unsynced_employees: u64,
    pub unsynced_customers: u64,
    pub unsynced_service_items: u64,
    pub unsynced_time_activities: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_record_each_action() {
        let mut counts = SyncCounts::default();
        counts.record(SyncAction::Created);
        counts.record(SyncAction::Created);
        counts.record(SyncAction::Matched);
        counts.record(SyncAction::AlreadySynced);
        assert_eq!(counts.created, 2);
        assert_eq!(counts.matched, 1);
        assert_eq!(counts.already_synced, 1);
    }

    #[test]
    fn sync_action_is_snake_case() {
        let json = serde_json::to_string(&SyncAction::AlreadySynced).unwrap();
        assert_eq!(json, "\"already_synced\"");
    }
}
