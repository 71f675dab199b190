mod client;
mod error;
mod types;

pub use client::{CLOUDFLARE_API_BASE, CloudflareClient};
pub use error::CloudflareError;
pub use types::{DnsRecord, HyperdriveConfig, PagesDomain};

use async_trait::async_trait;

use super::ResourceLookup;

#[async_trait]
impl ResourceLookup for CloudflareClient {
    async fn hyperdrive_id(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<Option<String>, CloudflareError> {
        self.find_hyperdrive_id(account_id, name).await
    }

    async fn pages_domain_id(
        &self,
        account_id: &str,
        project: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError> {
        self.find_pages_domain_id(account_id, project, domain).await
    }

    async fn cname_record_id(
        &self,
        zone_id: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError> {
        self.find_dns_record_id(zone_id, domain).await
    }
}
