//! Employee repository.

use tt_core::entities::Employee;
use tt_core::ids::PREFIX_EMPLOYEE;

use crate::error::DatabaseError;
use crate::helpers::{count, get_opt_string, limit_clause, set_qbo_id_once};
use crate::service::TtService;

const SELECT_COLS: &str = "id, company_id, first_name, last_name, email, phone, qbo_id";

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
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
    pub async fn create_employee(
        &self,
        company_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Employee, DatabaseError> {
        let id = self.db().generate_id(PREFIX_EMPLOYEE).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO employees ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)"
                ),
                libsql::params![id.as_str(), company_id, first_name, last_name, email, phone],
            )
            .await?;
        Ok(Employee {
            id,
            company_id: company_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            qbo_id: None,
        })
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM employees WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "employee",
            id: id.to_string(),
        })?;
        row_to_employee(&row)
    }

    /// List employees, optionally restricted to one company.
    pub async fn list_employees(
        &self,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Employee>, DatabaseError> {
        self.query_employees("", company_id, limit).await
    }

    /// Employees of a company that have no QBO ID yet.
    pub async fn list_unsynced_employees(
        &self,
        company_id: &str,
    ) -> Result<Vec<Employee>, DatabaseError> {
        self.query_employees("qbo_id IS NULL", Some(company_id), None)
            .await
    }

    pub async fn count_unsynced_employees(&self) -> Result<u64, DatabaseError> {
        count(
            self.db().conn(),
            "SELECT COUNT(*) FROM employees WHERE qbo_id IS NULL",
            (),
        )
        .await
    }

    /// Record the QBO ID returned for an employee. Set at most once.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown row, or
    /// `DatabaseError::InvalidState` if a different QBO ID is already stored.
    pub async fn set_employee_qbo_id(&self, id: &str, qbo_id: &str) -> Result<(), DatabaseError> {
        set_qbo_id_once(self.db().conn(), "employees", "employee", id, qbo_id).await
    }

    async fn query_employees(
        &self,
        filter: &str,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Employee>, DatabaseError> {
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
            "SELECT {SELECT_COLS} FROM employees{where_clause} ORDER BY rowid{}",
            limit_clause(limit)
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_employee(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::{fixture, test_service};

    #[tokio::test]
    async fn create_and_get() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;

        let fetched = svc.get_employee(&fx.employee.id).await.unwrap();
        assert_eq!(fetched, fx.employee);
        assert_eq!(fetched.full_name(), "First Last");
        assert!(fetched.qbo_id.is_none());
    }

    #[tokio::test]
    async fn create_for_missing_company_fails() {
        let svc = test_service().await;
        let result = svc
            .create_employee("cmp-missing", "A", "B", "", "")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_filters_by_company_and_limit() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;
        svc.create_employee(&fx.company.id, "Second", "Person", "", "")
            .await
            .unwrap();
        let other = svc.create_company("Other").await.unwrap();
        svc.create_employee(&other.id, "Third", "Person", "", "")
            .await
            .unwrap();

        assert_eq!(svc.list_employees(None, None).await.unwrap().len(), 3);
        assert_eq!(
            svc.list_employees(Some(&fx.company.id), None)
                .await
                .unwrap()
                .len(),
            2
        );
        let limited = svc.list_employees(None, Some(1)).await.unwrap();
        assert_eq!(limited, vec![fx.employee]);
    }

    #[tokio::test]
    async fn qbo_id_is_set_at_most_once() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;

        svc.set_employee_qbo_id(&fx.employee.id, "987654321")
            .await
            .unwrap();
        // Same value again is a no-op.
        svc.set_employee_qbo_id(&fx.employee.id, "987654321")
            .await
            .unwrap();
        let err = svc
            .set_employee_qbo_id(&fx.employee.id, "111")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));

        let fetched = svc.get_employee(&fx.employee.id).await.unwrap();
        assert_eq!(fetched.qbo_id.as_deref(), Some("987654321"));
    }

    #[tokio::test]
    async fn set_qbo_id_on_missing_employee_fails() {
        let svc = test_service().await;
        let err = svc.set_employee_qbo_id("emp-missing", "1").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity_type: "employee", .. }));
    }

    #[tokio::test]
    async fn unsynced_listing_excludes_synced() {
        let svc = test_service().await;
        let fx = fixture(&svc).await;
        let second = svc
            .create_employee(&fx.company.id, "Second", "Person", "", "")
            .await
            .unwrap();
        svc.set_employee_qbo_id(&fx.employee.id, "1").await.unwrap();

        let unsynced = svc.list_unsynced_employees(&fx.company.id).await.unwrap();
        assert_eq!(unsynced, vec![second]);
        assert_eq!(svc.count_unsynced_employees().await.unwrap(), 1);
    }
}
