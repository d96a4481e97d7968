use std::path::Path;

use anyhow::Context;
use tt_config::TtConfig;
use tt_db::service::TtService;
use tt_qbo::{HttpDataServiceFactory, QboGateway};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TtService,
    pub config: TtConfig,
}

impl AppContext {
    /// Open the local database, creating its directory on first use.
    pub async fn init(config: TtConfig) -> anyhow::Result<Self> {
        let db_path = &config.database.path;
        if !config.database.is_in_memory()
            && let Some(parent) = Path::new(db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let service = TtService::new_local(db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;

        let ctx = Self { service, config };
        ctx.load_bootstrap_data().await?;
        Ok(ctx)
    }

    /// Read the OAuth bootstrap file and seed demo data on first run.
    ///
    /// A missing file is not fatal here; `ttrack init --oauth-file` loads it
    /// later. A present but malformed file is an error.
    async fn load_bootstrap_data(&self) -> anyhow::Result<()> {
        let oauth_file = &self.config.general.oauth_file;
        let oauth_path = Path::new(oauth_file);
        if !oauth_path.exists() {
            tracing::debug!(path = %oauth_file, "no OAuth bootstrap file; skipping data load");
            return Ok(());
        }

        let outcome = self
            .service
            .initialize_data(oauth_path)
            .await
            .with_context(|| format!("failed to initialize data from {oauth_file}"))?;
        if !outcome.is_noop() {
            tracing::info!(
                path = %oauth_file,
                seeded_company = outcome.company.is_some(),
                "loaded OAuth bootstrap data"
            );
        }
        Ok(())
    }

    /// Sync gateway talking to QBO over HTTP.
    pub fn gateway(&self) -> anyhow::Result<QboGateway<'_, HttpDataServiceFactory>> {
        let factory = HttpDataServiceFactory::new(&self.config.qbo)
            .context("failed to build QBO HTTP client")?;
        Ok(QboGateway::new(&self.service, factory))
    }
}
