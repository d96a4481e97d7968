//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use tt_config::{ConfigError, PRODUCTION_BASE_URL, TtConfig};

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[qbo]
base_url = "https://quickbooks.api.intuit.com"
minor_version = 70
timeout_secs = 5

[database]
path = "/tmp/tt.db"

[general]
oauth_file = "secrets/oauth.json"
default_limit = 10
"#,
        )?;

        let config: TtConfig = Figment::from(Serialized::defaults(TtConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.qbo.base_url, PRODUCTION_BASE_URL);
        assert_eq!(config.qbo.minor_version, 70);
        assert_eq!(config.qbo.timeout_secs, 5);
        assert_eq!(config.database.path, "/tmp/tt.db");
        assert_eq!(config.general.oauth_file, "secrets/oauth.json");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[qbo]\nminor_version = 73\n")?;

        let config: TtConfig = Figment::from(Serialized::defaults(TtConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.qbo.minor_version, 73);
        assert!(config.qbo.is_sandbox());
        assert_eq!(config.database.path, ".timetrack/timetrack.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[database]\npath = \"from-toml.db\"\n")?;
        jail.set_env("TIMETRACK_DATABASE__PATH", "from-env.db");

        let config: TtConfig = Figment::from(Serialized::defaults(TtConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TIMETRACK_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".timetrack")?;
        jail.create_file(".timetrack/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = TtConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("TIMETRACK_QBO__BASE_URL", "ftp://nope");

        let err = TtConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
