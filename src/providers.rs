pub mod cloudflare;

use async_trait::async_trait;

use cloudflare::CloudflareError;

/// Read-only lookups that resolve human-readable names into provider ids.
///
/// Every method returns `Ok(None)` when nothing matches; errors are reserved
/// for transport and API failures.
#[async_trait]
pub trait ResourceLookup: Send + Sync {
    async fn hyperdrive_id(
        &self,
        account_id: &str,
        name: &str,
    ) -> Result<Option<String>, CloudflareError>;

    async fn pages_domain_id(
        &self,
        account_id: &str,
        project: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError>;

    async fn cname_record_id(
        &self,
        zone_id: &str,
        domain: &str,
    ) -> Result<Option<String>, CloudflareError>;
}
