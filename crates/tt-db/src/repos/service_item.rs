//! Service item repository.

use tt_core::entities::ServiceItem;
use tt_core::ids::PREFIX_SERVICE_ITEM;
use tt_core::money::Money;

use crate::error::DatabaseError;
use crate::helpers::{count, get_opt_string, limit_clause, set_qbo_id_once};
use crate::service::TtService;

const SELECT_COLS: &str = "id, company_id, name, description, rate_cents, currency, qbo_id";

fn row_to_service_item(row: &libsql::Row) -> Result<ServiceItem, DatabaseError> {
    Ok(ServiceItem {
        id: row.get(0)?,
        company_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        rate: Money {
            amount_cents: row.get(4)?,
            currency: row.get(5)?,
        },
        qbo_id: get_opt_string(row, 6)?,
    })
}

impl TtService {
    pub async fn create_service_item(
        &self,
        company_id: &str,
        name: &str,
        description: &str,
        rate: &Money,
    ) -> Result<ServiceItem, DatabaseError> {
        let id = self.db().generate_id(PREFIX_SERVICE_ITEM).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO service_items ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)"
                ),
                libsql::params![
                    id.as_str(),
                    company_id,
                    name,
                    description,
                    rate.amount_cents,
                    rate.currency.as_str()
                ],
            )
            .await?;
        Ok(ServiceItem {
            id,
            company_id: company_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            rate: rate.clone(),
            qbo_id: None,
        })
    }

    pub async fn get_service_item(&self, id: &str) -> Result<ServiceItem, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM service_items WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "service item",
            id: id.to_string(),
        })?;
        row_to_service_item(&row)
    }

    pub async fn list_service_items(
        &self,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ServiceItem>, DatabaseError> {
        let sql = match company_id {
            Some(_) => format!(
                "SELECT {SELECT_COLS} FROM service_items WHERE company_id = ?1 ORDER BY rowid{}",
                limit_clause(limit)
            ),
            None => format!(
                "SELECT {SELECT_COLS} FROM service_items ORDER BY rowid{}",
                limit_clause(limit)
            ),
        };
        let params: Vec<libsql::Value> = company_id.map(Into::into).into_iter().collect();
        self.collect_service_items(&sql, params).await
    }

    pub async fn list_unsynced_service_items(
        &self,
        company_id: &str,
    ) -> Result<Vec<ServiceItem>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM service_items
             WHERE company_id = ?1 AND qbo_id IS NULL ORDER BY rowid"
        );
        self.collect_service_items(&sql, vec![company_id.into()])
            .await
    }

    pub async fn count_unsynced_service_items(&self) -> Result<u64, DatabaseError> {
        count(
            self.db().conn(),
            "SELECT COUNT(*) FROM service_items WHERE qbo_id IS NULL",
            (),
        )
        .await
    }

    /// Record the QBO item ID for a service item. Set at most once.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown row, or
    /// `DatabaseError::InvalidState` if a different QBO ID is already stored.
    pub async fn set_service_item_qbo_id(
        &self,
        id: &str,
        qbo_id: &str,
    ) -> Result<(), DatabaseError> {
        set_qbo_id_once(self.db().conn(), "service_items", "service item", id, qbo_id).await
    }

    async fn collect_service_items(
        &self,
        sql: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<ServiceItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_service_item(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use tt_core::money::Money;

    use crate::test_support::{fixture, test_service};

    #[tokio::test]
    async fn rate_survives_storage() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;

        let fetched = svc.get_service_item(&fx.item.id).await.unwrap();
        assert_eq!(fetched.rate, Money::from_cents("USD", 5000));
        assert_eq!(fetched.rate.to_string(), "USD 50.00");
        assert_eq!(fetched, fx.item);
    }

    #[tokio::test]
    async fn list_and_sync_state() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;
        let deposition = svc
            .create_service_item(
                &fx.company.id,
                "Deposition",
                "Asking people serious questions",
                &Money::from_cents("USD", 10000),
            )
            .await
            .unwrap();

        let all = svc.list_service_items(Some(&fx.company.id), None).await.unwrap();
        assert_eq!(all.len(), 2);

        svc.set_service_item_qbo_id(&fx.item.id, "3").await.unwrap();
        let unsynced = svc
            .list_unsynced_service_items(&fx.company.id)
            .await
            .unwrap();
        assert_eq!(unsynced, vec![deposition]);
        assert_eq!(svc.count_unsynced_service_items().await.unwrap(), 1);
    }
}
