use std::{fmt::Debug, time::Duration};

use anyhow::Context;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};

use crate::{domain::ContactForm, util::error_chain_fmt};

/// 中转服务未返回原因时的提示
pub const REJECTED_FALLBACK: &str = "Failed to send email";
/// 网络错误或响应无法解析时的提示
pub const UNREACHABLE_FALLBACK: &str =
    "Failed to send message. Please try again or contact me directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// 邮件中转服务(Web3Forms)客户端
#[derive(Debug)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    access_key: SecretString,
}

impl RelayClient {
    pub fn new(
        endpoint: &str,
        access_key: SecretString,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build relay client.")?;
        let endpoint = reqwest::Url::parse(endpoint)
            .with_context(|| format!("failed to parse relay endpoint `{endpoint}`."))?;

        Ok(Self {
            client,
            endpoint,
            access_key,
        })
    }

    pub fn from_config(config: &crate::config::Config) -> anyhow::Result<Self> {
        let relay_config = &config.relay;

        Self::new(
            &relay_config.endpoint,
            relay_config.access_key.clone(),
            relay_config.timeout(),
        )
    }

    /// 发送一次请求，不重试
    #[tracing::instrument(
        name = "relaying contact message",
        skip_all,
        fields(contact_email = %form.email.as_ref())
    )]
    pub async fn submit(&self, form: &ContactForm) -> SubmissionOutcome {
        match self.try_submit(form).await {
            Ok(RelayResponse { success: true, .. }) => {
                tracing::info!("relay accepted the message.");
                SubmissionOutcome::Success
            }
            Ok(RelayResponse { message, .. }) => {
                let reason = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK.into());
                tracing::warn!(reason = %reason, "relay rejected the message.");
                SubmissionOutcome::Failure(reason)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "failed to reach the relay."
                );
                SubmissionOutcome::Failure(UNREACHABLE_FALLBACK.into())
            }
        }
    }

    async fn try_submit(&self, form: &ContactForm) -> Result<RelayResponse, RelayError> {
        let subject = form.subject();
        let body = RelayRequestBody {
            access_key: self.access_key.expose_secret(),
            name: form.name.as_ref(),
            email: form.email.as_ref(),
            message: form.message.as_ref(),
            subject: &subject,
        };

        // 不检查状态码，中转服务在失败时同样返回JSON
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(RelayError::Transport)?;
        tracing::debug!(status = %response.status(), "relay responded.");

        let bytes = response.bytes().await.map_err(RelayError::Transport)?;
        serde_json::from_slice(&bytes).map_err(RelayError::Decode)
    }
}

#[derive(serde::Serialize)]
struct RelayRequestBody<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: &'a str,
}

#[derive(serde::Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("failed to reach the relay endpoint.")]
    Transport(#[source] reqwest::Error),
    #[error("relay response is not valid JSON.")]
    Decode(#[source] serde_json::Error),
}

impl Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
