use std::sync::atomic::{AtomicUsize, Ordering};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::{request_timeout, FALLBACK_BASE_URLS};
use crate::errors::{InvoflowError, InvoflowResult};
use crate::structs::config::config::Config;

/// HTTP wrapper around the approval backend. Owned by the composition root
/// and passed to services explicitly; the fallback cursor is interior state
/// of this value, not a process-global.
///
/// HTTP error statuses surface to the caller unmodified. Only a
/// connection-level failure (no response at all) advances the active base
/// URL to the next candidate, and a successful fallback is permanent for
/// the rest of the session.
pub struct ApiClient {
    client: Client,
    candidates: Vec<String>,
    active: AtomicUsize,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> InvoflowResult<Self> {
        let mut candidates: Vec<String> = Vec::new();
        if let Some(base) = &config.api.base_url {
            candidates.push(base.trim_end_matches('/').to_string());
        }
        for url in FALLBACK_BASE_URLS {
            if !candidates.iter().any(|c| c == url) {
                candidates.push((*url).to_string());
            }
        }
        Self::with_base_urls(candidates, config.auth.token.clone())
    }

    pub fn with_base_urls(candidates: Vec<String>, auth_token: Option<String>) -> InvoflowResult<Self> {
        if candidates.is_empty() {
            return Err(InvoflowError::config_error(
                "No API base URLs configured",
                Some("api.base_url"),
                Some("Set api.base_url in the config file"),
            ));
        }
        let client = Client::builder().timeout(request_timeout()).build()?;
        Ok(Self {
            client,
            candidates,
            active: AtomicUsize::new(0),
            auth_token: auth_token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Base URL the next request will target.
    pub fn active_base_url(&self) -> &str {
        let idx = self.active.load(Ordering::Relaxed).min(self.candidates.len() - 1);
        &self.candidates[idx]
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> InvoflowResult<T> {
        let operation = format!("GET {}", path);
        let response = self
            .send_with_fallback(&operation, |base| {
                self.client.get(format!("{}{}", base, path)).query(query)
            })
            .await?;
        self.decode_json(&operation, response).await
    }

    pub async fn get_bytes(&self, path: &str, query: &[(String, String)]) -> InvoflowResult<Vec<u8>> {
        let operation = format!("GET {}", path);
        let response = self
            .send_with_fallback(&operation, |base| {
                self.client.get(format!("{}{}", base, path)).query(query)
            })
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InvoflowError::api_error(&operation, status.as_u16(), &body));
        }
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> InvoflowResult<T> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> InvoflowResult<T> {
        self.send_json(Method::PATCH, path, body).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> InvoflowResult<T> {
        self.send_json(Method::PUT, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> InvoflowResult<T> {
        let operation = format!("DELETE {}", path);
        let response = self
            .send_with_fallback(&operation, |base| {
                self.client.delete(format!("{}{}", base, path))
            })
            .await?;
        self.decode_json(&operation, response).await
    }

    /// Multipart form submission built from text fields. The form is rebuilt
    /// per attempt because a form body cannot be reused across retries.
    pub async fn upload_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> InvoflowResult<T> {
        let operation = format!("{} {} (multipart)", method, path);
        let response = self
            .send_with_fallback(&operation, |base| {
                let mut form = reqwest::multipart::Form::new();
                for (key, value) in fields {
                    form = form.text(key.clone(), value.clone());
                }
                self.client
                    .request(method.clone(), format!("{}{}", base, path))
                    .multipart(form)
            })
            .await?;
        self.decode_json(&operation, response).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> InvoflowResult<T> {
        let operation = format!("{} {}", method, path);
        let response = self
            .send_with_fallback(&operation, |base| {
                self.client
                    .request(method.clone(), format!("{}{}", base, path))
                    .json(body)
            })
            .await?;
        self.decode_json(&operation, response).await
    }

    async fn send_with_fallback<F>(&self, operation: &str, build: F) -> InvoflowResult<Response>
    where
        F: Fn(&str) -> RequestBuilder,
    {
        let len = self.candidates.len();
        let start = self.active.load(Ordering::Relaxed).min(len - 1);
        let mut last_error: Option<reqwest::Error> = None;

        for idx in start..len {
            let base = &self.candidates[idx];
            if idx != start {
                log::warn!("🔁 Retrying against fallback API at: {}", base);
            }

            let mut request = build(base);
            if let Some(token) = &self.auth_token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) => {
                    // Any response, success or HTTP error, pins this base URL
                    // for the rest of the session.
                    self.active.store(idx, Ordering::Relaxed);
                    return Ok(response);
                }
                Err(e) => {
                    log::warn!("No response from {}: {}", base, e);
                    last_error = Some(e);
                }
            }
        }

        self.active.store(len - 1, Ordering::Relaxed);
        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "all API endpoints failed".to_string());
        Err(InvoflowError::network_error(
            operation,
            Some(self.active_base_url()),
            &reason,
        ))
    }

    async fn decode_json<T: DeserializeOwned>(&self, operation: &str, response: Response) -> InvoflowResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InvoflowError::api_error(operation, status.as_u16(), &body));
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
