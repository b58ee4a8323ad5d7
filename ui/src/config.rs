//! Explicit app configuration injected by the platform shells.
//!
//! Shells call `use_context_provider(AppConfig::default)` (or a configured
//! instance) at the root; views look it up and build their own `ApiClient`
//! from it. No ambient globals.

use api::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub patient_id: String,
    pub token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.alignly.app".to_string(),
            patient_id: "demo-patient".to_string(),
            token: None,
        }
    }
}

impl AppConfig {
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::new(self.api_base.clone());
        match &self.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        }
    }
}
