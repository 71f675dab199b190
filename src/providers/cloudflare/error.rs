use thiserror::Error;

/// Cloudflare-specific errors that can occur during lookups.
///
/// SECURITY: Error messages must NEVER contain sensitive data like API tokens.
#[derive(Debug, Error)]
pub enum CloudflareError {
    /// Token could not be turned into an Authorization header
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level error (connection failed, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("lookup failed for {resource_type}: {message}")]
    LookupFailed {
        resource_type: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = CloudflareError::Auth {
            message: "Invalid token format".to_string(),
        };
        assert_eq!(err.to_string(), "authentication failed: Invalid token format");
    }

    #[test]
    fn test_api_error_display() {
        let err = CloudflareError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API error (403): Forbidden");
    }

    #[test]
    fn test_lookup_failed_display() {
        let err = CloudflareError::LookupFailed {
            resource_type: "cloudflare_hyperdrive_config".to_string(),
            message: "expected an array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "lookup failed for cloudflare_hyperdrive_config: expected an array"
        );
    }
}
