//! HTTP client for the Catalyst Center auth and intent endpoints.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::error::{AgentError, Result};

use super::types::{AuthToken, Device, DeviceInventory};

/// Maximum records per inventory page. The intent API rejects larger limits.
const PAGE_LIMIT: usize = 500;

/// Client for a single Catalyst Center instance.
///
/// All operations are stateless HTTPS calls: the token returned by
/// [`authenticate`](DnacClient::authenticate) is threaded explicitly through
/// the two query operations, never cached in the client.
pub struct DnacClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl DnacClient {
    /// Build a client for `base_url` with basic-auth credentials.
    ///
    /// `accept_invalid_certs` disables TLS certificate validation and is an
    /// explicit opt-in for lab controllers with self-signed certificates.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        accept_invalid_certs: bool,
    ) -> Result<Self> {
        if accept_invalid_certs {
            warn!("TLS certificate validation disabled for Catalyst Center requests");
        }
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(AgentError::Network)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Build a client from startup configuration.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        Self::new(
            config.dnac_base_url.clone(),
            config.dnac_username.clone(),
            config.dnac_password.clone(),
            config.accept_invalid_certs,
        )
    }

    /// Obtain an auth token from the token endpoint.
    ///
    /// The endpoint reports failures in-band via an `error` field; that
    /// reason is surfaced verbatim in the returned `Authentication` error.
    pub async fn authenticate(&self) -> Result<AuthToken> {
        let url = format!("{}/dna/system/api/v1/auth/token", self.base_url);
        debug!(%url, "requesting auth token");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let body: TokenResponse = response.json().await?;
        if let Some(reason) = body.error {
            let reason = reason
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| reason.to_string());
            return Err(AgentError::Authentication(format!(
                "failed to retrieve access token: {reason}"
            )));
        }
        body.token
            .map(AuthToken)
            .ok_or(AgentError::MalformedResponse {
                field: "Token".into(),
            })
    }

    /// List the full device inventory, page by page.
    ///
    /// Offsets are 1-based and advance by [`PAGE_LIMIT`] after each non-empty
    /// page; an empty page ends pagination. A request failure partway is
    /// logged and the pages gathered so far are returned with
    /// `complete: false`; callers must treat a short result as potentially
    /// truncated, not as a small inventory.
    pub async fn device_inventory(&self, token: &AuthToken) -> Result<DeviceInventory> {
        let mut devices: Vec<Device> = Vec::new();
        let mut offset = 1usize;

        loop {
            let url = format!(
                "{}/dna/intent/api/v1/network-device?offset={offset}&limit={PAGE_LIMIT}",
                self.base_url
            );
            debug!(%url, accumulated = devices.len(), "fetching inventory page");

            let page = match self.fetch_inventory_page(&url, token).await {
                Ok(page) => page,
                Err(err) => {
                    warn!(%err, offset, "inventory pagination failed, returning partial result");
                    return Ok(DeviceInventory {
                        devices,
                        complete: false,
                    });
                }
            };

            if page.is_empty() {
                break;
            }
            devices.extend(page);
            offset += PAGE_LIMIT;
        }

        Ok(DeviceInventory {
            devices,
            complete: true,
        })
    }

    async fn fetch_inventory_page(&self, url: &str, token: &AuthToken) -> Result<Vec<Device>> {
        let response = self
            .http
            .get(url)
            .header("x-auth-token", token.as_str())
            .send()
            .await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::api(status, body));
        }

        let body: InventoryResponse = response.json().await?;
        Ok(body.response.unwrap_or_default())
    }

    /// Fetch the running configuration for one device, verbatim.
    ///
    /// Unlike inventory listing this path does not degrade: transport
    /// failures and malformed bodies propagate to the caller.
    pub async fn device_config(&self, token: &AuthToken, device_id: &str) -> Result<String> {
        let url = format!(
            "{}/dna/intent/api/v1/network-device/{device_id}/config",
            self.base_url
        );
        debug!(%url, "fetching device config");

        let response = self
            .http
            .get(&url)
            .header("x-auth-token", token.as_str())
            .send()
            .await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::api(status, body));
        }

        let body: ConfigResponse = response.json().await?;
        body.response.ok_or(AgentError::MalformedResponse {
            field: "response".into(),
        })
    }
}

// Catalyst Center response bodies (internal).

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: Option<String>,
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct InventoryResponse {
    response: Option<Vec<Device>>,
}

#[derive(Deserialize)]
struct ConfigResponse {
    response: Option<String>,
}
