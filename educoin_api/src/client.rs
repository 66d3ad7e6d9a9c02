//! HTTP client for the Educoin payments API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    types::{Center, CenterPayments, CheckoutRequest, CheckoutResponse},
    Error,
};

/// HTTP client for the Educoin payments API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
/// Failures are logged with their cause and surfaced as [`Error`].
pub struct Client {
    /// Base URL for the API. Defaults to `https://educoin.fixoo.uz`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Educoin API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://educoin.fixoo.uz".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn http_client() -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let resp = Self::http_client()?
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;
        parse_response(resp).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let payload = serde_json::to_string(body).map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            Error::RequestFailed
        })?;
        let resp = Self::http_client()?
            .post(url)
            .header("content-type", "application/json")
            .header("accept", "application/json, text/plain, */*")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post resource: {}", e);
                Error::RequestFailed
            })?;
        parse_response(resp).await
    }

    /// Fetches every center that can receive payments.
    pub async fn get_centers(&self) -> Result<Vec<Center>, Error> {
        self.get::<Vec<Center>>("/centers").await
    }

    /// Fetches all payments, grouped by center.
    pub async fn get_payments(&self) -> Result<Vec<CenterPayments>, Error> {
        self.get::<Vec<CenterPayments>>("/payments").await
    }

    /// Starts a checkout. On success the response carries the URL of the
    /// payment provider page the payer should be sent to.
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, Error> {
        self.post::<CheckoutRequest, CheckoutResponse>("/api/payment/checkout", request)
            .await
    }
}

async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::RequestFailed
    })?;

    if !status.is_success() {
        let snippet = truncate_body(&body);
        tracing::error!("Request failed with status {}: {}", status, snippet);
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        });
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        let snippet = truncate_body(&body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::RequestFailed
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
