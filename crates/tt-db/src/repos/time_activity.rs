//! Time activity repository.

use chrono::{NaiveDate, Utc};

use tt_core::entities::TimeActivity;
use tt_core::ids::PREFIX_TIME_ACTIVITY;

use crate::error::DatabaseError;
use crate::helpers::{
    count, format_date, get_opt_string, get_u32, limit_clause, parse_date, parse_datetime,
    set_qbo_id_once,
};
use crate::service::TtService;

const SELECT_COLS: &str = "id, company_id, employee_id, customer_id, service_item_id, \
     activity_date, hours, minutes, description, billable, qbo_id, created_at";

/// Input for [`TtService::create_time_activity`]. The company is derived from
/// the employee.
#[derive(Debug, Clone)]
pub struct NewTimeActivity<'a> {
    pub employee_id: &'a str,
    pub customer_id: &'a str,
    pub service_item_id: &'a str,
    pub activity_date: NaiveDate,
    pub hours: u32,
    pub minutes: u32,
    pub description: Option<&'a str>,
    pub billable: bool,
}

fn row_to_time_activity(row: &libsql::Row) -> Result<TimeActivity, DatabaseError> {
    Ok(TimeActivity {
        id: row.get(0)?,
        company_id: row.get(1)?,
        employee_id: row.get(2)?,
        customer_id: row.get(3)?,
        service_item_id: row.get(4)?,
        activity_date: parse_date(&row.get::<String>(5)?)?,
        hours: get_u32(row, 6)?,
        minutes: get_u32(row, 7)?,
        description: get_opt_string(row, 8)?,
        billable: row.get::<i64>(9)? != 0,
        qbo_id: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

impl TtService {
    /// Record time locally.
    ///
    /// The employee, customer and service item must all belong to the same
    /// company, and the duration must be non-zero with `minutes < 60`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for a zero or malformed duration
    /// or for references spanning companies, `DatabaseError::NotFound` if a
    /// referenced row is missing, or any libSQL error from the insert.
    pub async fn create_time_activity(
        &self,
        new: &NewTimeActivity<'_>,
    ) -> Result<TimeActivity, DatabaseError> {
        if new.minutes >= 60 {
            return Err(DatabaseError::InvalidState(format!(
                "minutes must be below 60, got {}",
                new.minutes
            )));
        }
        if new.hours == 0 && new.minutes == 0 {
            return Err(DatabaseError::InvalidState(
                "time activity must have a non-zero duration".into(),
            ));
        }

        let employee = self.get_employee(new.employee_id).await?;
        let customer = self.get_customer(new.customer_id).await?;
        let item = self.get_service_item(new.service_item_id).await?;
        let company_id = employee.company_id;
        for (kind, owner) in [("customer", &customer.company_id), ("service item", &item.company_id)] {
            if *owner != company_id {
                return Err(DatabaseError::InvalidState(format!(
                    "{kind} belongs to company {owner}, employee to {company_id}"
                )));
            }
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TIME_ACTIVITY).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO time_activities ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, NULL, ?11)"
                ),
                libsql::params![
                    id.as_str(),
                    company_id.as_str(),
                    new.employee_id,
                    new.customer_id,
                    new.service_item_id,
                    format_date(new.activity_date),
                    i64::from(new.hours),
                    i64::from(new.minutes),
                    new.description,
                    new.billable,
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(TimeActivity {
            id,
            company_id,
            employee_id: new.employee_id.to_string(),
            customer_id: new.customer_id.to_string(),
            service_item_id: new.service_item_id.to_string(),
            activity_date: new.activity_date,
            hours: new.hours,
            minutes: new.minutes,
            description: new.description.map(String::from),
            billable: new.billable,
            qbo_id: None,
            created_at: now,
        })
    }

    pub async fn get_time_activity(&self, id: &str) -> Result<TimeActivity, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM time_activities WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity_type: "time activity",
            id: id.to_string(),
        })?;
        row_to_time_activity(&row)
    }

    /// List time activities, newest activity date first.
    pub async fn list_time_activities(
        &self,
        company_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<TimeActivity>, DatabaseError> {
        let filter = if company_id.is_some() {
            " WHERE company_id = ?1"
        } else {
            ""
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM time_activities{filter}
             ORDER BY activity_date DESC, rowid DESC{}",
            limit_clause(limit)
        );
        let params: Vec<libsql::Value> = company_id.map(Into::into).into_iter().collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_time_activity(&row)?);
        }
        Ok(results)
    }

    pub async fn count_unsynced_time_activities(&self) -> Result<u64, DatabaseError> {
        count(
            self.db().conn(),
            "SELECT COUNT(*) FROM time_activities WHERE qbo_id IS NULL",
            (),
        )
        .await
    }

    /// Record the QBO ID for a time activity. Set at most once.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown row, or
    /// `DatabaseError::InvalidState` if a different QBO ID is already stored.
    pub async fn set_time_activity_qbo_id(
        &self,
        id: &str,
        qbo_id: &str,
    ) -> Result<(), DatabaseError> {
        set_qbo_id_once(
            self.db().conn(),
            "time_activities",
            "time activity",
            id,
            qbo_id,
        )
        .await
    }
}
