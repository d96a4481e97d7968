//! Aggregate counts for `ttrack status`.

use tt_core::responses::StatusResponse;

use crate::error::DatabaseError;
use crate::helpers::count;
use crate::service::TtService;

impl TtService {
    /// Counts for the status report: app info, companies, and unsynced rows
    /// per entity.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any of the count queries fail.
    pub async fn status(&self) -> Result<StatusResponse, DatabaseError> {
        let connected_companies = count(
            self.db().conn(),
            "SELECT COUNT(*) FROM companies
             WHERE qbo_realm_id IS NOT NULL AND qbo_realm_id != ''
               AND access_token IS NOT NULL AND access_token != ''",
            (),
        )
        .await?;

        Ok(StatusResponse {
            app_info_loaded: self.count_app_info().await? > 0,
            companies: self.count_companies().await?,
            connected_companies,
            unsynced_employees: self.count_unsynced_employees().await?,
            unsynced_customers: self.count_unsynced_customers().await?,
            unsynced_service_items: self.count_unsynced_service_items().await?,
            unsynced_time_activities: self.count_unsynced_time_activities().await?,
        })
    }
}
