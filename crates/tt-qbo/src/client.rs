//! `reqwest` implementation of [`DataService`].
//!
//! Queries are `GET {root}/v3/company/{realm}/query?query=..&minorversion=..`
//! and creates are `POST {root}/v3/company/{realm}/{entity}?minorversion=..`,
//! both authorized with the company's bearer token.

use std::time::Duration;

use serde_json::Value;
use tt_config::QboConfig;
use tt_core::entities::Company;

use crate::error::QboError;
use crate::http::check_response;
use crate::model::QboEntity;
use crate::service::{DataService, DataServiceFactory};

const USER_AGENT: &str = concat!("timetrack/", env!("CARGO_PKG_VERSION"));

/// Builds [`HttpDataService`]s that share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpDataServiceFactory {
    http: reqwest::Client,
    api_root: String,
    minor_version: u32,
}

impl HttpDataServiceFactory {
    /// # Errors
    ///
    /// Returns `QboError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &QboConfig) -> Result<Self, QboError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_root: config.api_root().to_string(),
            minor_version: config.minor_version,
        })
    }
}

impl DataServiceFactory for HttpDataServiceFactory {
    type Service = HttpDataService;

    fn data_service(&self, company: &Company) -> Result<HttpDataService, QboError> {
        let (Some(realm_id), Some(access_token)) = (
            company.qbo_realm_id.as_deref().filter(|r| !r.is_empty()),
            company.access_token.as_deref().filter(|t| !t.is_empty()),
        ) else {
            return Err(QboError::NotConnected {
                company_id: company.id.clone(),
            });
        };
        Ok(HttpDataService {
            http: self.http.clone(),
            company_url: format!("{}/v3/company/{realm_id}", self.api_root),
            access_token: access_token.to_string(),
            minor_version: self.minor_version,
        })
    }
}

/// Data service for a single QBO company.
#[derive(Debug, Clone)]
pub struct HttpDataService {
    http: reqwest::Client,
    company_url: String,
    access_token: String,
    minor_version: u32,
}

impl HttpDataService {
    fn query_url(&self, query: &str) -> String {
        format!(
            "{}/query?query={}&minorversion={}",
            self.company_url,
            urlencoding::encode(query),
            self.minor_version
        )
    }

    fn entity_url(&self, entity: &str) -> String {
        format!(
            "{}/{}?minorversion={}",
            self.company_url,
            entity.to_ascii_lowercase(),
            self.minor_version
        )
    }
}

impl DataService for HttpDataService {
    async fn execute_query<T: QboEntity>(&self, query: &str) -> Result<Vec<T>, QboError> {
        tracing::debug!(query, "QBO query");
        let resp = self
            .http
            .get(self.query_url(query))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body: Value = check_response(resp).await?.json().await?;
        parse_query_response(body)
    }

    async fn add<T: QboEntity>(&self, entity: &T) -> Result<T, QboError> {
        tracing::debug!(entity = T::ENTITY_NAME, "QBO create");
        let resp = self
            .http
            .post(self.entity_url(T::ENTITY_NAME))
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(entity)
            .send()
            .await?;
        let body: Value = check_response(resp).await?.json().await?;
        parse_add_response(body)
    }
}

/// Pull `QueryResponse.<Entity>` out of a query response. A missing list
/// means no matches.
pub(crate) fn parse_query_response<T: QboEntity>(mut body: Value) -> Result<Vec<T>, QboError> {
    let Some(query_response) = body.get_mut("QueryResponse") else {
        return Err(QboError::Parse(
            "query response has no QueryResponse".to_string(),
        ));
    };
    match query_response.get_mut(T::ENTITY_NAME).map(Value::take) {
        Some(rows) => serde_json::from_value(rows)
            .map_err(|e| QboError::Parse(format!("{} query rows: {e}", T::ENTITY_NAME))),
        None => Ok(Vec::new()),
    }
}

/// Pull `<Entity>` out of a create response.
pub(crate) fn parse_add_response<T: QboEntity>(mut body: Value) -> Result<T, QboError> {
    let object = body
        .get_mut(T::ENTITY_NAME)
        .map(Value::take)
        .ok_or_else(|| QboError::Parse(format!("create response has no {}", T::ENTITY_NAME)))?;
    serde_json::from_value(object)
        .map_err(|e| QboError::Parse(format!("{} create response: {e}", T::ENTITY_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QboAccount, QboEmployee};
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn company(realm: Option<&str>, token: Option<&str>) -> Company {
        Company {
            id: "cmp-00000001".into(),
            name: "The Federalists".into(),
            qbo_realm_id: realm.map(String::from),
            access_token: token.map(String::from),
            created_at: Utc::now(),
        }
    }

    fn factory(base_url: &str) -> HttpDataServiceFactory {
        HttpDataServiceFactory::new(&QboConfig {
            base_url: base_url.into(),
            ..QboConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_include_realm_and_minor_version() {
        let svc = factory("https://sandbox-quickbooks.api.intuit.com/")
            .data_service(&company(Some("123145"), Some("tok")))
            .unwrap();
        assert_eq!(
            svc.entity_url("TimeActivity"),
            "https://sandbox-quickbooks.api.intuit.com/v3/company/123145/timeactivity?minorversion=65"
        );
        assert_eq!(
            svc.query_url("select * from Item where Name = 'Research'"),
            "https://sandbox-quickbooks.api.intuit.com/v3/company/123145/query?query=select%20%2A%20from%20Item%20where%20Name%20%3D%20%27Research%27&minorversion=65"
        );
    }

    #[test]
    fn unconnected_company_is_rejected() {
        let err = factory("https://sandbox-quickbooks.api.intuit.com")
            .data_service(&company(Some("123145"), None))
            .unwrap_err();
        assert!(matches!(err, QboError::NotConnected { company_id } if company_id == "cmp-00000001"));
    }

    #[test]
    fn query_rows_are_extracted() {
        let body = json!({
            "QueryResponse": {
                "Employee": [{ "Id": "55", "GivenName": "First", "FamilyName": "Last" }],
                "startPosition": 1,
                "maxResults": 1
            },
            "time": "2014-09-12T10:12:02.000-07:00"
        });
        let rows: Vec<QboEmployee> = parse_query_response(body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_deref(), Some("55"));
    }

    #[test]
    fn empty_query_response_means_no_rows() {
        let body = json!({ "QueryResponse": {}, "time": "2014-09-12T10:12:02.000-07:00" });
        let rows: Vec<QboAccount> = parse_query_response(body).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn query_response_without_envelope_is_a_parse_error() {
        let err = parse_query_response::<QboAccount>(json!({ "Fault": {} })).unwrap_err();
        assert!(matches!(err, QboError::Parse(_)));
    }

    #[test]
    fn created_object_is_extracted() {
        let body = json!({
            "Employee": { "Id": "987654321", "SyncToken": "0", "GivenName": "First" },
            "time": "2014-09-12T10:12:02.000-07:00"
        });
        let employee: QboEmployee = parse_add_response(body).unwrap();
        assert_eq!(employee.id.as_deref(), Some("987654321"));
        assert_eq!(employee.sync_token.as_deref(), Some("0"));
    }
}
