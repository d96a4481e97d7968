//! Customer repository.

use tt_core::entities::Customer;
use tt_core::ids::PREFIX_CUSTOMER;

use crate::error::DatabaseError;
use crate::helpers::{count, get_opt_string, limit_clause, set_qbo_id_once};
use crate::service::TtService;

const SELECT_COLS: &str = "id, company_id, first_name, last_name, email, phone, qbo_id";

fn row_to_customer(row: &libsql::Row) -> Result<Customer, DatabaseError> {
    Ok(Customer {
        id: row.get(0)?,
        company_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        qbo_id: get_opt_string(row, 6)?,
    })
}

impl TtService {
    pub async fn create_customer(
        &self,
        company_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Customer, DatabaseError> {
        let id = self.db().generate_id(PREFIX_CUSTOMER).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO customers ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)"
                ),
                libsql::params![id.as_str(), company_id, first_name, last_name, email, phone],
            )
            .await?;
        Ok(Customer {
            id,
            company_id: company_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            qbo_id: None,
        })
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM customers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "customer",
            id: id.to_string(),
        })?;
        row_to_customer(&row)
    }

    /// List customers, optionally restricted to one company.
    pub async fn list_customers(
        &self,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Customer>, DatabaseError> {
        self.query_customers("", company_id, limit).await
    }

    /// Customers of a company that have no QBO ID yet.
    pub async fn list_unsynced_customers(
        &self,
        company_id: &str,
    ) -> Result<Vec<Customer>, DatabaseError> {
        self.query_customers("qbo_id IS NULL", Some(company_id), None)
            .await
    }

    pub async fn count_unsynced_customers(&self) -> Result<u64, DatabaseError> {
        count(
            self.db().conn(),
            "SELECT COUNT(*) FROM customers WHERE qbo_id IS NULL",
            (),
        )
        .await
    }

    /// Record the QBO ID returned for a customer. Set at most once.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown row, or
    /// `DatabaseError::InvalidState` if a different QBO ID is already stored.
    pub async fn set_customer_qbo_id(&self, id: &str, qbo_id: &str) -> Result<(), DatabaseError> {
        set_qbo_id_once(self.db().conn(), "customers", "customer", id, qbo_id).await
    }

    async fn query_customers(
        &self,
        filter: &str,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Customer>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        if !filter.is_empty() {
            conditions.push(filter.to_string());
        }
        if let Some(company_id) = company_id {
            params.push(company_id.into());
            conditions.push(format!("company_id = ?{}", params.len()));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM customers{where_clause} ORDER BY rowid{}",
            limit_clause(limit)
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_customer(&row)?);
        }
        Ok(results)
    }
}
