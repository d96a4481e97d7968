//! OAuth app info repository.

use tt_core::entities::AppInfo;
use tt_core::ids::PREFIX_APP_INFO;

use crate::error::DatabaseError;
use crate::helpers::count;
use crate::service::TtService;

const SELECT_COLS: &str = "id, app_token, consumer_key, consumer_secret";

fn row_to_app_info(row: &libsql::Row) -> Result<AppInfo, DatabaseError> {
    Ok(AppInfo {
        id: row.get(0)?,
        app_token: row.get(1)?,
        consumer_key: row.get(2)?,
        consumer_secret: row.get(3)?,
    })
}

impl TtService {
    pub async fn create_app_info(
        &self,
        app_token: &str,
        consumer_key: &str,
        consumer_secret: &str,
    ) -> Result<AppInfo, DatabaseError> {
        let id = self.db().generate_id(PREFIX_APP_INFO).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO app_info ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), app_token, consumer_key, consumer_secret],
            )
            .await?;
        Ok(AppInfo {
            id,
            app_token: app_token.to_string(),
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
        })
    }

    /// The first stored app info, if any.
    pub async fn get_app_info(&self) -> Result<Option<AppInfo>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM app_info ORDER BY rowid LIMIT 1"),
                (),
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_app_info(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn count_app_info(&self) -> Result<u64, DatabaseError> {
        count(self.db().conn(), "SELECT COUNT(*) FROM app_info", ()).await
    }
}
