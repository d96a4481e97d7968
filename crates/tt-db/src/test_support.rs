//! Shared test utilities for tt-db unit tests.

use tt_core::entities::{Company, Customer, Employee, ServiceItem};
use tt_core::money::Money;

use crate::service::TtService;

/// In-memory service with migrations applied.
pub async fn test_service() -> TtService {
    TtService::new_local(":memory:").await.unwrap()
}

/// A company with one employee, customer and service item.
pub struct Fixture {
    pub company: Company,
    pub employee: Employee,
    pub customer: Customer,
    pub item: ServiceItem,
}

pub async fn fixture(svc: &TtService) -> Fixture {
    let company = svc.create_company("The Federalists").await.unwrap();
    let employee = svc
        .create_employee(&company.id, "First", "Last", "first.last@gmail.com", "916-222-3333")
        .await
        .unwrap();
    let customer = svc
        .create_customer(&company.id, "Foo", "Bar", "foo.bar@gmail.com", "916-123-4567")
        .await
        .unwrap();
    let item = svc
        .create_service_item(
            &company.id,
            "Research",
            "Reading a lot",
            &Money::from_cents("USD", 5000),
        )
        .await
        .unwrap();
    Fixture {
        company,
        employee,
        customer,
        item,
    }
}
