use std::path::Path;

use anyhow::Context;
use tt_config::TtConfig;

/// Load `.env` from the working directory if present, then the layered config.
pub fn load_config() -> anyhow::Result<TtConfig> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let config = TtConfig::load().context("failed to load timetrack configuration")?;
    if !config.qbo.is_sandbox() {
        tracing::debug!(base_url = %config.qbo.base_url, "using production QBO endpoint");
    }
    Ok(config)
}
