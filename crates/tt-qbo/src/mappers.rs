//! Local entity to QBO object mapping.

use tt_core::entities::{Customer, Employee, ServiceItem, TimeActivity};
use tt_core::money::Money;

use crate::model::{
    EmailAddress, QboCustomer, QboEmployee, QboItem, QboTimeActivity, ReferenceType,
    TelephoneNumber,
};

/// Remote references a time activity points at, resolved by the caller.
#[derive(Debug, Clone)]
pub struct TimeActivityRefs<'a> {
    pub employee: ReferenceType,
    pub customer: ReferenceType,
    pub item: ReferenceType,
    pub hourly_rate: &'a Money,
}

fn email(address: &str) -> Option<EmailAddress> {
    (!address.is_empty()).then(|| EmailAddress {
        address: Some(address.to_string()),
    })
}

fn phone(number: &str) -> Option<TelephoneNumber> {
    (!number.is_empty()).then(|| TelephoneNumber {
        free_form_number: Some(number.to_string()),
    })
}

#[must_use]
pub fn employee_to_qbo(employee: &Employee) -> QboEmployee {
    QboEmployee {
        given_name: Some(employee.first_name.clone()),
        family_name: Some(employee.last_name.clone()),
        primary_email_addr: email(&employee.email),
        primary_phone: phone(&employee.phone),
        ..Default::default()
    }
}

#[must_use]
pub fn customer_to_qbo(customer: &Customer) -> QboCustomer {
    QboCustomer {
        given_name: Some(customer.first_name.clone()),
        family_name: Some(customer.last_name.clone()),
        display_name: Some(customer.display_name()),
        primary_email_addr: email(&customer.email),
        primary_phone: phone(&customer.phone),
        ..Default::default()
    }
}

/// Map a service item. The income account reference is left for the caller.
#[must_use]
pub fn service_item_to_qbo(item: &ServiceItem) -> QboItem {
    QboItem {
        name: Some(item.name.clone()),
        description: (!item.description.is_empty()).then(|| item.description.clone()),
        item_type: Some("Service".to_string()),
        unit_price: Some(item.rate.as_major_units()),
        ..Default::default()
    }
}

#[must_use]
pub fn time_activity_to_qbo(activity: &TimeActivity, refs: TimeActivityRefs<'_>) -> QboTimeActivity {
    let (billable_status, hourly_rate) = if activity.billable {
        ("Billable", Some(refs.hourly_rate.as_major_units()))
    } else {
        ("NotBillable", None)
    };
    QboTimeActivity {
        txn_date: Some(activity.activity_date.format("%Y-%m-%d").to_string()),
        name_of: Some("Employee".to_string()),
        employee_ref: Some(refs.employee),
        customer_ref: Some(refs.customer),
        item_ref: Some(refs.item),
        billable_status: Some(billable_status.to_string()),
        taxable: Some(false),
        hourly_rate,
        hours: Some(activity.hours),
        minutes: Some(activity.minutes),
        description: activity.description.clone(),
        ..Default::default()
    }
}
