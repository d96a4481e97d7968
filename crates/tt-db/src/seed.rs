//! First-run data loader.
//!
//! On an empty database, reads the OAuth bootstrap file into `app_info` and
//! seeds a demo law firm with two employees, two customers and two service
//! items. Nothing happens once app info exists.

use std::path::Path;

use serde::Serialize;
use tt_config::OAuthBootstrap;
use tt_core::entities::{AppInfo, Company};
use tt_core::money::Money;

use crate::error::DatabaseError;
use crate::service::TtService;

pub const DEMO_COMPANY_NAME: &str = "Your Law Firm";

const DEMO_EMPLOYEES: &[(&str, &str, &str, &str)] = &[
    ("Jackie", "Chiles", "jackie.chiles@law.com", "916-333-4444"),
    ("Johnnie", "Cochran", "johnnie.cochran@law.com", "916-222-5555"),
];

const DEMO_CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("John", "Defendant", "john.defendant@innocent.com", "916-555-7777"),
    ("Jane", "Litigious", "jane.litigious@lawsuit.com", "916-777-9999"),
];

const DEMO_SERVICE_ITEMS: &[(&str, &str, i64)] = &[
    ("Research", "Reading large ponderous tomes", 5000),
    ("Deposition", "Asking people serious questions", 10000),
];

/// What [`TtService::initialize_data`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
    /// App info stored from the bootstrap file, if it was needed.
    pub app_info: Option<AppInfo>,
    /// Demo company created, if there was none.
    pub company: Option<Company>,
}

impl SeedOutcome {
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.app_info.is_none() && self.company.is_none()
    }
}

impl TtService {
    /// Load OAuth app info from `oauth_path` and seed demo data if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Bootstrap` if the bootstrap file is missing or
    /// malformed, or any database error from the inserts. Seeding is atomic.
    pub async fn initialize_data(&self, oauth_path: &Path) -> Result<SeedOutcome, DatabaseError> {
        if self.count_app_info().await? > 0 {
            tracing::debug!("app info already present; skipping data load");
            return Ok(SeedOutcome::default());
        }

        let bootstrap = OAuthBootstrap::load(oauth_path)?;

        self.begin().await?;
        match self.seed(&bootstrap).await {
            Ok(outcome) => {
                self.commit_or_rollback().await?;
                Ok(outcome)
            }
            Err(error) => {
                self.rollback().await;
                Err(error)
            }
        }
    }

    async fn seed(&self, bootstrap: &OAuthBootstrap) -> Result<SeedOutcome, DatabaseError> {
        let creds = &bootstrap.app_info;
        let app_info = self
            .create_app_info(&creds.app_token, &creds.consumer_key, &creds.consumer_secret)
            .await?;

        let company = if self.count_companies().await? == 0 {
            tracing::info!("no company data in the app, creating demo data");
            Some(self.seed_demo_company().await?)
        } else {
            None
        };

        Ok(SeedOutcome {
            app_info: Some(app_info),
            company,
        })
    }

    async fn seed_demo_company(&self) -> Result<Company, DatabaseError> {
        let company = self.create_company(DEMO_COMPANY_NAME).await?;
        for (first, last, email, phone) in DEMO_EMPLOYEES {
            self.create_employee(&company.id, first, last, email, phone)
                .await?;
        }
        for (first, last, email, phone) in DEMO_CUSTOMERS {
            self.create_customer(&company.id, first, last, email, phone)
                .await?;
        }
        for (name, description, cents) in DEMO_SERVICE_ITEMS {
            self.create_service_item(
                &company.id,
                name,
                description,
                &Money::from_cents("USD", *cents),
            )
            .await?;
        }
        Ok(company)
    }
}
