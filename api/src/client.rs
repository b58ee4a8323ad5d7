//! Thin REST client for the Alignly backend.
//!
//! All payloads are JSON over HTTPS. A bearer token, when present, is attached
//! to every request. Transient failures (transport errors and 5xx) are retried
//! with exponential backoff, 3 attempts doubling from 1 s, while 4xx fail
//! immediately (business-level errors are not retryable).

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Aligner, CheckInRequest, StoryChapter, Treatment, WearStatusResponse,
};

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach a bearer token to subsequent requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    // --- Wear tracking -----------------------------------------------------

    pub async fn wear_status(
        &self,
        aligner_id: &str,
        patient_id: &str,
    ) -> ApiResult<WearStatusResponse> {
        let url = self.url(&format!("/aligners/{aligner_id}/wear/status"));
        self.request(|http| http.get(&url).query(&[("patientId", patient_id)]))
            .await
    }

    pub async fn pause_wear(&self, aligner_id: &str) -> ApiResult<WearStatusResponse> {
        let url = self.url(&format!("/aligners/{aligner_id}/wear/pause"));
        self.request(|http| http.post(&url)).await
    }

    pub async fn resume_wear(&self, aligner_id: &str) -> ApiResult<WearStatusResponse> {
        let url = self.url(&format!("/aligners/{aligner_id}/wear/resume"));
        self.request(|http| http.post(&url)).await
    }

    pub async fn check_in(
        &self,
        aligner_id: &str,
        body: &CheckInRequest,
    ) -> ApiResult<WearStatusResponse> {
        let url = self.url(&format!("/aligners/{aligner_id}/wear/checkin"));
        self.request(|http| http.post(&url).json(body)).await
    }

    // --- Treatment & aligners ----------------------------------------------

    /// `None` when the patient has no current treatment (backend 404).
    pub async fn treatment_for_patient(
        &self,
        patient_id: &str,
    ) -> ApiResult<Option<Treatment>> {
        let url = self.url(&format!("/treatments/patient/{patient_id}"));
        match self.request(|http| http.get(&url)).await {
            Ok(treatment) => Ok(Some(treatment)),
            Err(ApiError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn aligners_for_patient(&self, patient_id: &str) -> ApiResult<Vec<Aligner>> {
        let url = self.url(&format!("/aligners/patient/{patient_id}"));
        self.request(|http| http.get(&url)).await
    }

    /// Ask the backend to complete the current aligner and activate the next.
    pub async fn confirm_aligner_change(&self, aligner_id: &str) -> ApiResult<Aligner> {
        let url = self.url(&format!("/aligners/{aligner_id}/confirm"));
        self.request(|http| http.post(&url)).await
    }

    // --- Story --------------------------------------------------------------

    pub async fn story_chapters(&self, patient_id: &str) -> ApiResult<Vec<StoryChapter>> {
        let url = self.url("/story/chapters");
        self.request(|http| http.get(&url).query(&[("patientId", patient_id)]))
            .await
    }

    // --- Plumbing -----------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Execute with the retry policy. The builder closure is re-invoked for
    /// each attempt so request bodies don't need to be cloneable.
    async fn request<T, F>(&self, build: F) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let mut delay_ms = INITIAL_BACKOFF_MS;
        let mut attempt = 1;

        loop {
            let mut builder = build(&self.http);
            if let Some(token) = &self.token {
                builder = builder.bearer_auth(token);
            }

            let outcome = match builder.send().await {
                Ok(response) => classify(response).await,
                Err(err) => Err(ApiError::Network(err.to_string())),
            };

            match outcome {
                Err(err) if should_retry(&err, attempt) => {
                    sleep_ms(delay_ms).await;
                    delay_ms *= 2;
                    attempt += 1;
                }
                other => return other.and_then(decode::<T>),
            }
        }
    }
}

/// Server-side error envelope; absent or unparseable bodies fall back to the
/// HTTP status line.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn classify(response: reqwest::Response) -> ApiResult<serde_json::Value> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()));
    }

    if status.is_server_error() {
        return Err(ApiError::Network(format!("server error {status}")));
    }

    match status.as_u16() {
        401 | 403 => Err(ApiError::Auth),
        404 => Err(ApiError::NotFound),
        code => {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            Err(ApiError::Validation { status: code, message })
        }
    }
}

/// Transient failures get up to `MAX_ATTEMPTS` tries; everything else fails
/// on the first answer.
fn should_retry(err: &ApiError, attempt: u32) -> bool {
    err.is_transient() && attempt < MAX_ATTEMPTS
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("https://api.alignly.test///");
        assert_eq!(
            client.url("/aligners/a-1/wear/status"),
            "https://api.alignly.test/aligners/a-1/wear/status"
        );
    }

    #[test]
    fn only_network_errors_are_transient() {
        assert!(ApiError::Network("timeout".into()).is_transient());
        assert!(!ApiError::Auth.is_transient());
        assert!(!ApiError::NotFound.is_transient());
        assert!(!ApiError::Validation {
            status: 422,
            message: "bad date".into()
        }
        .is_transient());
    }

    #[test]
    fn retry_is_bounded_and_skips_business_errors() {
        let transient = ApiError::Network("connection reset".into());
        assert!(should_retry(&transient, 1));
        assert!(should_retry(&transient, 2));
        assert!(!should_retry(&transient, MAX_ATTEMPTS));

        for attempt in 1..=MAX_ATTEMPTS {
            assert!(!should_retry(&ApiError::Auth, attempt));
            assert!(!should_retry(&ApiError::NotFound, attempt));
            assert!(!should_retry(
                &ApiError::Validation {
                    status: 400,
                    message: "bad request".into()
                },
                attempt
            ));
        }
    }

    #[test]
    fn decode_maps_shape_mismatch() {
        let err = decode::<crate::models::Aligner>(serde_json::json!({"nope": 1})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
