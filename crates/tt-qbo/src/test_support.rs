//! In-process fake of the QBO data service plus a seeded local store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tt_core::entities::{Company, Customer, Employee, ServiceItem};
use tt_core::money::Money;
use tt_db::service::TtService;

use crate::error::QboError;
use crate::model::QboEntity;
use crate::service::{DataService, DataServiceFactory};

/// ID given to the first object the fake creates; later ones count up.
pub const FIRST_CREATED_ID: u64 = 987_654_321;

#[derive(Default)]
struct FakeState {
    results: HashMap<String, Vec<Value>>,
    queries: Vec<String>,
    adds: Vec<(&'static str, Value)>,
    created: u64,
    omit_ids: bool,
}

/// Records every query and create. Queries return the rows registered with
/// [`FakeDataService::respond`], or nothing.
#[derive(Clone, Default)]
pub struct FakeDataService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeDataService {
    pub fn respond(&self, query: impl Into<String>, rows: Vec<Value>) {
        self.state.lock().unwrap().results.insert(query.into(), rows);
    }

    pub fn omit_created_ids(&self) {
        self.state.lock().unwrap().omit_ids = true;
    }

    pub fn queries(&self) -> Vec<String> {
        self.state.lock().unwrap().queries.clone()
    }

    /// Entity name and request body of every create, in order.
    pub fn adds(&self) -> Vec<(&'static str, Value)> {
        self.state.lock().unwrap().adds.clone()
    }
}

impl DataService for FakeDataService {
    async fn execute_query<T: QboEntity>(&self, query: &str) -> Result<Vec<T>, QboError> {
        let rows = {
            let mut state = self.state.lock().unwrap();
            state.queries.push(query.to_string());
            state.results.get(query).cloned().unwrap_or_default()
        };
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| QboError::Parse(e.to_string())))
            .collect()
    }

    async fn add<T: QboEntity>(&self, entity: &T) -> Result<T, QboError> {
        let sent = serde_json::to_value(entity).map_err(|e| QboError::Parse(e.to_string()))?;
        let mut created = sent.clone();
        {
            let mut state = self.state.lock().unwrap();
            if !state.omit_ids {
                created["Id"] = Value::String((FIRST_CREATED_ID + state.created).to_string());
            }
            state.created += 1;
            state.adds.push((T::ENTITY_NAME, sent));
        }
        serde_json::from_value(created).map_err(|e| QboError::Parse(e.to_string()))
    }
}

/// Hands out clones of one fake, refusing companies that are not connected.
pub struct FakeFactory {
    service: FakeDataService,
}

impl FakeFactory {
    pub const fn new(service: FakeDataService) -> Self {
        Self { service }
    }
}

impl DataServiceFactory for FakeFactory {
    type Service = FakeDataService;

    fn data_service(&self, company: &Company) -> Result<FakeDataService, QboError> {
        if !company.is_connected() {
            return Err(QboError::NotConnected {
                company_id: company.id.clone(),
            });
        }
        Ok(self.service.clone())
    }
}

/// A company with one employee, customer and service item.
pub struct Fixture {
    pub company: Company,
    pub employee: Employee,
    pub customer: Customer,
    pub item: ServiceItem,
}

/// Seeded in-memory store whose company has no QBO connection.
pub async fn fixture() -> (TtService, Fixture) {
    let store = TtService::new_local(":memory:").await.unwrap();
    let company = store.create_company("The Federalists").await.unwrap();
    let employee = store
        .create_employee(&company.id, "First", "Last", "first.last@gmail.com", "916-222-3333")
        .await
        .unwrap();
    let customer = store
        .create_customer(&company.id, "Foo", "Bar", "foo.bar@gmail.com", "916-123-4567")
        .await
        .unwrap();
    let item = store
        .create_service_item(
            &company.id,
            "Research",
            "Reading a lot",
            &Money::from_cents("USD", 5000),
        )
        .await
        .unwrap();
    (
        store,
        Fixture {
            company,
            employee,
            customer,
            item,
        },
    )
}

/// Same as [`fixture`], with the company connected to realm `123145`.
pub async fn connected_fixture() -> (TtService, Fixture) {
    let (store, mut fx) = fixture().await;
    fx.company = store
        .connect_company(&fx.company.id, "123145", "access-token")
        .await
        .unwrap();
    (store, fx)
}
