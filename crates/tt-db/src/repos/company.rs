//! Company repository: CRUD, QBO connection, ownership tree.

use chrono::Utc;

use tt_core::entities::{Company, CompanyDetail};
use tt_core::ids::PREFIX_COMPANY;

use crate::error::DatabaseError;
use crate::helpers::{count, get_opt_string, parse_datetime};
use crate::service::TtService;

const SELECT_COLS: &str = "id, name, qbo_realm_id, access_token, created_at";

fn row_to_company(row: &libsql::Row) -> Result<Company, DatabaseError> {
    Ok(Company {
        id: row.get(0)?,
        name: row.get(1)?,
        qbo_realm_id: get_opt_string(row, 2)?,
        access_token: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl TtService {
    pub async fn create_company(&self, name: &str) -> Result<Company, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_COMPANY).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO companies ({SELECT_COLS}) VALUES (?1, ?2, NULL, NULL, ?3)"),
                libsql::params![id.as_str(), name, now.to_rfc3339()],
            )
            .await?;
        tracing::debug!(%id, name, "company created");
        Ok(Company {
            id,
            name: name.to_string(),
            qbo_realm_id: None,
            access_token: None,
            created_at: now,
        })
    }

    pub async fn get_company(&self, id: &str) -> Result<Company, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM companies WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "company",
            id: id.to_string(),
        })?;
        row_to_company(&row)
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM companies ORDER BY rowid"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_company(&row)?);
        }
        Ok(results)
    }

    pub async fn count_companies(&self) -> Result<u64, DatabaseError> {
        count(self.db().conn(), "SELECT COUNT(*) FROM companies", ()).await
    }

    /// Store the QBO realm and access token obtained for a company.
    pub async fn connect_company(
        &self,
        id: &str,
        realm_id: &str,
        access_token: &str,
    ) -> Result<Company, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE companies SET qbo_realm_id = ?2, access_token = ?3 WHERE id = ?1",
                libsql::params![id, realm_id, access_token],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "company",
                id: id.to_string(),
            });
        }
        tracing::info!(%id, realm_id, "company connected to QBO");
        self.get_company(id).await
    }

    /// Load a company with all the employees, customers and items it owns.
    pub async fn get_company_detail(&self, id: &str) -> Result<CompanyDetail, DatabaseError> {
        let company = self.get_company(id).await?;
        let employees = self.list_employees(Some(id), None).await?;
        let customers = self.list_customers(Some(id), None).await?;
        let service_items = self.list_service_items(Some(id), None).await?;
        Ok(CompanyDetail {
            company,
            employees,
            customers,
            service_items,
        })
    }
}
