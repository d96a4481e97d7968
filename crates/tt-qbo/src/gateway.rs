//! Idempotent lookup-or-create of local entities in QuickBooks Online.
//!
//! Every operation short-circuits when the entity already carries a remote
//! ID. Otherwise it looks for a remote object with the same name, creates one
//! if none exists, stores the remote ID and writes it back into the caller's
//! struct. Errors propagate unchanged; nothing is retried.

use tt_core::entities::{Customer, Employee, ServiceItem, TimeActivity};
use tt_core::responses::{SyncAction, SyncReport, SyncResponse};
use tt_db::service::TtService;

use crate::error::QboError;
use crate::mappers::{self, TimeActivityRefs};
use crate::model::{QboAccount, QboCustomer, QboEmployee, QboEntity, QboItem, ReferenceType};
use crate::query::{self, INCOME_ACCOUNT_QUERY};
use crate::service::{DataService, DataServiceFactory};

/// Sync gateway over a local store and a per-company remote data service.
pub struct QboGateway<'a, F> {
    store: &'a TtService,
    factory: F,
}

impl<'a, F: DataServiceFactory> QboGateway<'a, F> {
    pub const fn new(store: &'a TtService, factory: F) -> Self {
        Self { store, factory }
    }

    async fn service_for(&self, company_id: &str) -> Result<F::Service, QboError> {
        let company = self.store.get_company(company_id).await?;
        self.factory.data_service(&company)
    }

    /// Match the employee by given and family name, or create it.
    ///
    /// # Errors
    ///
    /// Returns `QboError` if the company is not connected, a remote call
    /// fails, or the remote ID cannot be stored.
    pub async fn create_employee_in_qbo(
        &self,
        employee: &mut Employee,
    ) -> Result<SyncResponse, QboError> {
        if let Some(qbo_id) = &employee.qbo_id {
            return Ok(already_synced("employee", &employee.id, qbo_id));
        }

        let service = self.service_for(&employee.company_id).await?;
        let lookup = query::employee_by_name(&employee.first_name, &employee.last_name);
        let (qbo_id, action) = match find_existing::<QboEmployee, _>(&service, &lookup).await? {
            Some(id) => (id, SyncAction::Matched),
            None => (
                create(&service, &mappers::employee_to_qbo(employee)).await?,
                SyncAction::Created,
            ),
        };

        self.store
            .set_employee_qbo_id(&employee.id, &qbo_id)
            .await?;
        employee.qbo_id = Some(qbo_id.clone());
        Ok(synced("employee", &employee.id, qbo_id, action))
    }

    /// Match the customer by given and family name, or create it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_employee_in_qbo`].
    pub async fn create_customer_in_qbo(
        &self,
        customer: &mut Customer,
    ) -> Result<SyncResponse, QboError> {
        if let Some(qbo_id) = &customer.qbo_id {
            return Ok(already_synced("customer", &customer.id, qbo_id));
        }

        let service = self.service_for(&customer.company_id).await?;
        let lookup = query::customer_by_name(&customer.first_name, &customer.last_name);
        let (qbo_id, action) = match find_existing::<QboCustomer, _>(&service, &lookup).await? {
            Some(id) => (id, SyncAction::Matched),
            None => (
                create(&service, &mappers::customer_to_qbo(customer)).await?,
                SyncAction::Created,
            ),
        };

        self.store
            .set_customer_qbo_id(&customer.id, &qbo_id)
            .await?;
        customer.qbo_id = Some(qbo_id.clone());
        Ok(synced("customer", &customer.id, qbo_id, action))
    }

    /// Match the service item by name, or create it against the first
    /// `Income`/`ServiceFeeIncome` account.
    ///
    /// # Errors
    ///
    /// Returns `QboError::IncomeAccountNotFound` when a new item is needed and
    /// no such account exists; nothing is created or stored in that case.
    pub async fn create_item_in_qbo(
        &self,
        item: &mut ServiceItem,
    ) -> Result<SyncResponse, QboError> {
        if let Some(qbo_id) = &item.qbo_id {
            return Ok(already_synced("service_item", &item.id, qbo_id));
        }

        let service = self.service_for(&item.company_id).await?;
        let lookup = query::item_by_name(&item.name);
        let (qbo_id, action) = match find_existing::<QboItem, _>(&service, &lookup).await? {
            Some(id) => (id, SyncAction::Matched),
            None => {
                let mut qbo_item = mappers::service_item_to_qbo(item);
                qbo_item.income_account_ref = Some(income_account(&service).await?);
                (create(&service, &qbo_item).await?, SyncAction::Created)
            }
        };

        self.store
            .set_service_item_qbo_id(&item.id, &qbo_id)
            .await?;
        item.qbo_id = Some(qbo_id.clone());
        Ok(synced("service_item", &item.id, qbo_id, action))
    }

    /// Create the time activity, syncing its employee, customer and service
    /// item first. Time activities are never matched against existing ones.
    ///
    /// # Errors
    ///
    /// Returns the first error from syncing a reference, or any error from
    /// the create itself.
    pub async fn create_time_activity_in_qbo(
        &self,
        activity: &mut TimeActivity,
    ) -> Result<SyncResponse, QboError> {
        if let Some(qbo_id) = &activity.qbo_id {
            return Ok(already_synced("time_activity", &activity.id, qbo_id));
        }

        let mut employee = self.store.get_employee(&activity.employee_id).await?;
        let employee_ref = ReferenceType::new(
            self.create_employee_in_qbo(&mut employee).await?.qbo_id,
            Some(employee.full_name()),
        );
        let mut customer = self.store.get_customer(&activity.customer_id).await?;
        let customer_ref = ReferenceType::new(
            self.create_customer_in_qbo(&mut customer).await?.qbo_id,
            Some(customer.display_name()),
        );
        let mut item = self
            .store
            .get_service_item(&activity.service_item_id)
            .await?;
        let item_ref = ReferenceType::new(
            self.create_item_in_qbo(&mut item).await?.qbo_id,
            Some(item.name.clone()),
        );

        let service = self.service_for(&activity.company_id).await?;
        let qbo_activity = mappers::time_activity_to_qbo(
            activity,
            TimeActivityRefs {
                employee: employee_ref,
                customer: customer_ref,
                item: item_ref,
                hourly_rate: &item.rate,
            },
        );
        let qbo_id = create(&service, &qbo_activity).await?;

        self.store
            .set_time_activity_qbo_id(&activity.id, &qbo_id)
            .await?;
        activity.qbo_id = Some(qbo_id.clone());
        Ok(synced(
            "time_activity",
            &activity.id,
            qbo_id,
            SyncAction::Created,
        ))
    }

    /// Run lookup-or-create over every employee, customer and service item
    /// of a company, in that order.
    ///
    /// # Errors
    ///
    /// Stops at the first failure. Entities synced before it keep their IDs.
    pub async fn sync_company(&self, company_id: &str) -> Result<SyncReport, QboError> {
        let company = self.store.get_company(company_id).await?;
        self.factory.data_service(&company)?;

        let mut report = SyncReport {
            company_id: company.id.clone(),
            ..SyncReport::default()
        };
        for mut employee in self.store.list_employees(Some(company_id), None).await? {
            let outcome = self.create_employee_in_qbo(&mut employee).await?;
            report.employees.record(outcome.action);
        }
        for mut customer in self.store.list_customers(Some(company_id), None).await? {
            let outcome = self.create_customer_in_qbo(&mut customer).await?;
            report.customers.record(outcome.action);
        }
        for mut item in self.store.list_service_items(Some(company_id), None).await? {
            let outcome = self.create_item_in_qbo(&mut item).await?;
            report.service_items.record(outcome.action);
        }

        tracing::info!(
            company = %company.id,
            employees_created = report.employees.created,
            customers_created = report.customers.created,
            items_created = report.service_items.created,
            "company sync finished"
        );
        Ok(report)
    }
}

/// First remote object returned by `lookup` that carries an ID.
async fn find_existing<T: QboEntity, S: DataService>(
    service: &S,
    lookup: &str,
) -> Result<Option<String>, QboError> {
    let matches: Vec<T> = service.execute_query(lookup).await?;
    if matches.len() > 1 {
        tracing::warn!(
            entity = T::ENTITY_NAME,
            count = matches.len(),
            "several QBO objects match by name; using the first"
        );
    }
    Ok(matches.iter().find_map(|m| m.id().map(str::to_string)))
}

async fn create<T: QboEntity, S: DataService>(service: &S, entity: &T) -> Result<String, QboError> {
    let created = service.add(entity).await?;
    created
        .id()
        .map(str::to_string)
        .ok_or(QboError::MissingRemoteId {
            entity: T::ENTITY_NAME,
        })
}

async fn income_account<S: DataService>(service: &S) -> Result<ReferenceType, QboError> {
    let accounts: Vec<QboAccount> = service.execute_query(INCOME_ACCOUNT_QUERY).await?;
    accounts
        .into_iter()
        .find_map(|account| Some(ReferenceType::new(account.id?, account.name)))
        .ok_or(QboError::IncomeAccountNotFound)
}

fn already_synced(entity_type: &str, id: &str, qbo_id: &str) -> SyncResponse {
    tracing::debug!(entity_type, id, qbo_id, "already synced; skipping remote lookup");
    SyncResponse {
        entity_type: entity_type.to_string(),
        id: id.to_string(),
        qbo_id: qbo_id.to_string(),
        action: SyncAction::AlreadySynced,
    }
}

fn synced(entity_type: &str, id: &str, qbo_id: String, action: SyncAction) -> SyncResponse {
    if action == SyncAction::Matched {
        tracing::info!(entity_type, id, %qbo_id, "matched existing QBO object");
    } else {
        tracing::info!(entity_type, id, %qbo_id, "created QBO object");
    }
    SyncResponse {
        entity_type: entity_type.to_string(),
        id: id.to_string(),
        qbo_id,
        action,
    }
}
