use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// OAuth application credentials, loaded once from the bootstrap file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AppInfo {
    pub id: String,
    pub app_token: String,
    pub consumer_key: String,
    pub consumer_secret: String,
}
