//! Service layer hosting all repository methods.

use crate::TtDb;
use crate::error::DatabaseError;

/// Repository facade over [`TtDb`].
///
/// Every repo module adds methods via `impl TtService` blocks.
pub struct TtService {
    db: TtDb,
}

impl TtService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TtDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_db(db: TtDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &TtDb {
        &self.db
    }

    /// Run `BEGIN`; pair with [`Self::commit`] or [`Self::rollback`].
    pub(crate) async fn begin(&self) -> Result<(), DatabaseError> {
        self.db.conn().execute("BEGIN", ()).await?;
        Ok(())
    }

    pub(crate) async fn commit(&self) -> Result<(), DatabaseError> {
        self.db.conn().execute("COMMIT", ()).await?;
        Ok(())
    }

    pub(crate) async fn rollback(&self) {
        if let Err(error) = self.db.conn().execute("ROLLBACK", ()).await {
            tracing::warn!(%error, "rollback failed");
        }
    }

    /// `COMMIT`, rolling back if the commit itself fails so the connection
    /// never stays inside an open transaction.
    pub(crate) async fn commit_or_rollback(&self) -> Result<(), DatabaseError> {
        if let Err(error) = self.commit().await {
            self.rollback().await;
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_service;

    #[tokio::test]
    async fn failed_commit_leaves_no_open_transaction() {
        let svc = test_service().await;
        let conn = svc.db().conn();

        svc.begin().await.unwrap();
        conn.execute("PRAGMA defer_foreign_keys = ON", ())
            .await
            .unwrap();
        conn.execute(
            "INSERT INTO employees (id, company_id, first_name, last_name)
             VALUES ('emp-dangling', 'cmp-missing', 'First', 'Last')",
            (),
        )
        .await
        .unwrap();

        assert!(svc.commit_or_rollback().await.is_err());

        svc.begin().await.unwrap();
        svc.commit().await.unwrap();
        assert_eq!(svc.count_unsynced_employees().await.unwrap(), 0);
    }
}
