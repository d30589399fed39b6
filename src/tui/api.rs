use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::ProxyConfig;
use crate::error::ApplyError;
use crate::tui::providers::Provider;
use crate::tui::state::{ApplyDone, ApplyRequest};

// ── Wire payload ──────────────────────────────────────────────────────────────

/// Body of `POST /config`. Absent key/model are left out so the proxy keeps
/// whatever it already has.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRequest {
    pub provider: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl From<&Provider> for ConfigRequest {
    fn from(p: &Provider) -> Self {
        Self {
            provider: p.kind.clone(),
            base_url: p.base_url.clone(),
            api_key: p.api_key.clone(),
            model: p.model.clone(),
        }
    }
}

// ── Apply-Config ──────────────────────────────────────────────────────────────

/// HTTP client for talking to the proxy. The proxy is always on localhost, so
/// system proxy settings are bypassed.
pub fn proxy_client() -> reqwest::Result<Client> {
    Client::builder().no_proxy().build()
}

/// Push `provider` to the proxy. Returns the provider's display name on HTTP 200.
pub async fn apply_config(
    client: &Client,
    proxy: &ProxyConfig,
    provider: &Provider,
) -> Result<String, ApplyError> {
    let body = serde_json::to_vec(&ConfigRequest::from(provider))?;

    let resp = client
        .post(proxy.config_url())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ApplyError::Status(status.to_string()));
    }
    Ok(provider.display_name.clone())
}

/// Run one Apply-Config request off the UI task. The result comes back on `tx`
/// unless `cancel` fires first, in which case nothing is sent.
pub fn spawn_apply(
    client: Client,
    proxy: ProxyConfig,
    req: ApplyRequest,
    tx: mpsc::UnboundedSender<ApplyDone>,
) -> tokio::task::JoinHandle<()> {
    let ApplyRequest { id, provider, cancel } = req;
    tokio::spawn(async move {
        tracing::info!(id, provider = %provider.id, url = %proxy.config_url(), "applying provider");
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(id, "apply request superseded");
            }
            result = apply_config(&client, &proxy, &provider) => {
                match &result {
                    Ok(_) => tracing::info!(id, provider = %provider.id, "proxy accepted config"),
                    Err(e) => tracing::warn!(id, provider = %provider.id, error = %e, "proxy update failed"),
                }
                let _ = tx.send(ApplyDone { id, result });
            }
        }
    })
}
