use serde::Deserialize;

/// Envelope shared by every Cloudflare v4 endpoint.
///
/// Only `result` matters for lookups. It is optional so that an error body
/// (`"result": null`) still deserializes and its `errors` can be reported.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<CloudflareApiError>,
    pub result: Option<T>,
}

impl<T> CloudflareResponse<T> {
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct CloudflareApiError {
    #[serde(default)]
    #[allow(dead_code)] // NOTE: Kept for debug output
    pub code: u32,
    pub message: String,
}

/// An API object that can be located by its `name` field.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Returns the id of the first item named `target`.
///
/// A match whose id is empty counts as no match; later items with the same
/// name are not consulted.
pub fn find_id_by_name<T: Named>(items: &[T], target: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.name() == target)
        .map(|item| item.id())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Deserialize)]
pub struct HyperdriveConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Named for HyperdriveConfig {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize)]
pub struct PagesDomain {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Named for PagesDomain {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperdrive_config_ignores_unknown_fields() {
        let json = r#"{
            "id": "hd123",
            "name": "api-workers-hyperdrive",
            "origin": {
                "host": "db.example.com",
                "port": 5432,
                "database": "lag",
                "scheme": "postgres",
                "user": "postgres"
            },
            "caching": { "disabled": false }
        }"#;

        let config: HyperdriveConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.id, "hd123");
        assert_eq!(config.name, "api-workers-hyperdrive");
    }

    #[test]
    fn test_pages_domain_deserialization() {
        let json = r#"{
            "id": "dom456",
            "name": "lag.meepen.dev",
            "status": "active",
            "zone_tag": "023e105f4ecef8ad9ca31a8372d0c353",
            "created_on": "2024-01-01T05:20:00.12345Z"
        }"#;

        let domain: PagesDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.id, "dom456");
        assert_eq!(domain.name, "lag.meepen.dev");
        assert_eq!(domain.status.as_deref(), Some("active"));
    }

    #[test]
    fn test_dns_record_deserialization_with_serde_rename() {
        let json = r#"{
            "id": "rec789",
            "zone_id": "zone456",
            "name": "lag.meepen.dev",
            "type": "CNAME",
            "content": "lag-meepen-dev-frontend.pages.dev",
            "proxied": true,
            "ttl": 1
        }"#;

        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "rec789");
        assert_eq!(record.name, "lag.meepen.dev");
        assert_eq!(record.type_, "CNAME");
    }

    #[test]
    fn test_response_without_result_field() {
        let json = r#"{ "success": true, "errors": [] }"#;
        let response: CloudflareResponse<Vec<DnsRecord>> = serde_json::from_str(json).unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn test_response_with_errors() {
        let json = r#"{
            "success": false,
            "errors": [{"code": 10000, "message": "Authentication error"}],
            "result": null
        }"#;

        let response: CloudflareResponse<Vec<HyperdriveConfig>> =
            serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.first_error_message(), Some("Authentication error"));
    }

    #[test]
    fn test_find_id_by_name_matches_exact_name() {
        let configs = vec![
            HyperdriveConfig {
                id: "hd1".to_string(),
                name: "other-hyperdrive".to_string(),
            },
            HyperdriveConfig {
                id: "hd2".to_string(),
                name: "api-workers-hyperdrive".to_string(),
            },
        ];

        assert_eq!(
            find_id_by_name(&configs, "api-workers-hyperdrive"),
            Some("hd2".to_string())
        );
        assert_eq!(find_id_by_name(&configs, "api-workers"), None);
    }

    #[test]
    fn test_find_id_by_name_first_match_with_empty_id_is_none() {
        let domains = vec![
            PagesDomain {
                id: String::new(),
                name: "lag.meepen.dev".to_string(),
                status: None,
            },
            PagesDomain {
                id: "dom2".to_string(),
                name: "lag.meepen.dev".to_string(),
                status: None,
            },
        ];

        assert_eq!(find_id_by_name(&domains, "lag.meepen.dev"), None);
    }

    #[test]
    fn test_find_id_by_name_empty_list() {
        let configs: Vec<HyperdriveConfig> = Vec::new();
        assert_eq!(find_id_by_name(&configs, "anything"), None);
    }
}
