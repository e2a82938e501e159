//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_APP_NAME;
use crate::list::StaleResponsePolicy;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Settings for talking to the ticket-tracker backend.
pub struct ClientConfig {
    /// Base URL of the backend, e.g. `http://localhost:8080/`.
    pub api_base_url: String,
    /// Application name used as the prefix of the backend alert headers.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Page size of every list view.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// What to do with list responses that arrive after a newer request was issued.
    #[serde(default)]
    pub stale_responses: StaleResponsePolicy,
    /// Overall request timeout handed to the HTTP client.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[cfg(feature = "client")]
impl ClientConfig {
    /// Loads `{dir}/default.yaml`, the optional `{dir}/{app_env}.yaml` profile
    /// and `APP_`-prefixed environment variables, in that order.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ClientConfig>()
    }
}
