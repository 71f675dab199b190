use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::CloudflareError;
use super::types::{
    CloudflareResponse, DnsRecord, HyperdriveConfig, PagesDomain, find_id_by_name,
};

pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

#[derive(Clone)]
pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
}

impl CloudflareClient {
    pub fn new(token: &str) -> Result<Self, CloudflareError> {
        Self::with_base_url(token, CLOUDFLARE_API_BASE.to_string())
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(token: &str, base_url: String) -> Result<Self, CloudflareError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        let mut header_value =
            HeaderValue::from_str(&auth_value).map_err(|_| CloudflareError::Auth {
                message: "Invalid token format".to_string(),
            })?;
        header_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, header_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(CloudflareError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    pub async fn find_hyperdrive_id(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<Option<String>, CloudflareError> {
        let url = format!(
            "{}/accounts/{}/hyperdrive/configs",
            self.base_url, account_id
        );
        let configs: Vec<HyperdriveConfig> =
            self.get_result(&url, "cloudflare_hyperdrive_config").await?;

        tracing::debug!(count = configs.len(), name, "hyperdrive configs listed");
        Ok(find_id_by_name(&configs, name))
    }

    pub async fn find_pages_domain_id(
        &self,
        account_id: &str,
        project: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError> {
        let url = format!(
            "{}/accounts/{}/pages/projects/{}/domains",
            self.base_url,
            account_id,
            urlencoding::encode(project)
        );
        let domains: Vec<PagesDomain> = self.get_result(&url, "cloudflare_pages_domain").await?;

        if let Some(found) = domains.iter().find(|d| d.name == domain) {
            tracing::debug!(
                domain,
                status = found.status.as_deref().unwrap_or("unknown"),
                "pages domain found"
            );
        }
        Ok(find_id_by_name(&domains, domain))
    }

    // NOTE: Filtering happens server-side, so the first result wins.
    pub async fn find_dns_record_id(
        &self,
        zone_id: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError> {
        let url = format!(
            "{}/zones/{}/dns_records?type=CNAME&name={}",
            self.base_url,
            zone_id,
            urlencoding::encode(domain)
        );
        let records: Vec<DnsRecord> = self.get_result(&url, "cloudflare_record").await?;

        let id = records.into_iter().next().and_then(|record| {
            tracing::debug!(name = %record.name, record_type = %record.type_, "dns record found");
            Some(record.id).filter(|id| !id.is_empty())
        });
        Ok(id)
    }

    /// Issues a single GET and returns the `result` array, empty when absent.
    async fn get_result<T>(&self, url: &str, resource_type: &str) -> Result<Vec<T>, CloudflareError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<CloudflareResponse<serde_json::Value>>(&text)
                .ok()
                .and_then(|body| body.first_error_message().map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });

            return Err(CloudflareError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CloudflareResponse<Vec<T>> =
            serde_json::from_str(&text).map_err(|e| CloudflareError::LookupFailed {
                resource_type: resource_type.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        tracing::debug!(status = status.as_u16(), success = body.success, resource_type, "lookup response");
        Ok(body.result.unwrap_or_default())
    }
}

impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
