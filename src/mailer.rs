use crate::errors::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Delivers an encoded report to a recipient.
#[async_trait]
pub trait Transmitter: Send + Sync {
    async fn transmit(&self, pdf_base64: &str, email: &str) -> Result<(), AppError>;
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    error: Option<String>,
}

/// Posts `{ email, pdfBase64 }` to the mail relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AppError::internal)?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Transmitter for RelayClient {
    async fn transmit(&self, pdf_base64: &str, email: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "email": email, "pdfBase64": pdf_base64 }))
            .send()
            .await
            .map_err(AppError::bad_gateway)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = response
            .json::<RelayReply>()
            .await
            .ok()
            .and_then(|reply| reply.error)
            .unwrap_or_else(|| "no error message".to_string());
        Err(AppError::bad_gateway(format!("relay answered {status}: {detail}")))
    }
}
