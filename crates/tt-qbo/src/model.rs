//! QuickBooks Online wire types.
//!
//! Only the fields this app reads or writes are modelled. Everything is
//! optional on the way in so partial query results still deserialize, and
//! absent fields are left out on the way out so QBO keeps its defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A QBO entity that can be queried for and created through a data service.
pub trait QboEntity: Serialize + DeserializeOwned + Send + Sync {
    /// Entity name as used in QBO queries, response envelopes and endpoints.
    const ENTITY_NAME: &'static str;

    /// Remote ID, present on anything QBO has returned.
    fn id(&self) -> Option<&str>;
}

/// Reference to another QBO object by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceType {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ReferenceType {
    #[must_use]
    pub fn new(value: impl Into<String>, name: Option<String>) -> Self {
        Self {
            value: value.into(),
            name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TelephoneNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_form_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QboEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QboCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<TelephoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A product or service. This app only creates `Service` items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QboItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_account_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Chart-of-accounts entry. Read only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QboAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QboTimeActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ref: Option<ReferenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

macro_rules! impl_qbo_entity {
    ($ty:ty, $name:literal) => {
        impl QboEntity for $ty {
            const ENTITY_NAME: &'static str = $name;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }
    };
}

impl_qbo_entity!(QboEmployee, "Employee");
impl_qbo_entity!(QboCustomer, "Customer");
impl_qbo_entity!(QboItem, "Item");
impl_qbo_entity!(QboAccount, "Account");
impl_qbo_entity!(QboTimeActivity, "TimeActivity");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn employee_serializes_pascal_case_without_nulls() {
        let employee = QboEmployee {
            given_name: Some("Jackie".into()),
            family_name: Some("Chiles".into()),
            primary_email_addr: Some(EmailAddress {
                address: Some("jackie.chiles@law.com".into()),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({
                "GivenName": "Jackie",
                "FamilyName": "Chiles",
                "PrimaryEmailAddr": { "Address": "jackie.chiles@law.com" }
            })
        );
    }

    #[test]
    fn item_type_and_account_ref_wire_names() {
        let item = QboItem {
            name: Some("Research".into()),
            item_type: Some("Service".into()),
            unit_price: Some(50.0),
            income_account_ref: Some(ReferenceType::new("79", None)),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "Name": "Research",
                "Type": "Service",
                "UnitPrice": 50.0,
                "IncomeAccountRef": { "value": "79" }
            })
        );
    }

    #[test]
    fn partial_query_rows_deserialize() {
        let account: QboAccount = serde_json::from_value(json!({
            "Id": "79",
            "Name": "Services",
            "AccountType": "Income",
            "AccountSubType": "ServiceFeeIncome",
            "CurrentBalance": 0,
            "MetaData": { "CreateTime": "2014-09-12T10:12:02-07:00" }
        }))
        .unwrap();
        assert_eq!(account.id(), Some("79"));
        assert_eq!(account.account_sub_type.as_deref(), Some("ServiceFeeIncome"));
    }
}
