//! Credential parameters attached to every Vault request.
//!
//! Where the credentials go (query string or headers) is declared per
//! endpoint through [`AuthPlacement`]; which names carry which credential is
//! the single table below.

use crate::core::config::ApiConfig;

/// Parameter names that carry the API key.
pub const API_KEY_PARAMETERS: [&str; 4] = ["code", "redirect_uri", "scope", "state"];

/// Parameter name that carries the bearer token.
pub const BEARER_TOKEN_PARAMETER: &str = "x-apideck-downstream-authorization";

/// Where an endpoint expects its credential parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPlacement {
    /// Sent as request headers.
    Header,
    /// Appended to the query string after the endpoint's own parameters.
    Query,
}

impl std::fmt::Display for AuthPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Query => f.write_str("query"),
        }
    }
}

/// Name/value pairs for the configured credentials, in sending order.
///
/// Credentials that are not configured are left out.
pub fn credential_pairs(config: &ApiConfig) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(API_KEY_PARAMETERS.len() + 1);

    if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
        pairs.extend(API_KEY_PARAMETERS.iter().map(|name| (*name, key.to_string())));
    }

    if let Some(token) = config.bearer_token.as_deref().filter(|t| !t.is_empty()) {
        pairs.push((BEARER_TOKEN_PARAMETER, token.to_string()));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_configured() {
        assert!(credential_pairs(&ApiConfig::default()).is_empty());
    }

    #[test]
    fn test_api_key_fans_out_before_token() {
        let config = ApiConfig::default()
            .with_api_key("key")
            .with_bearer_token("tok");
        let pairs = credential_pairs(&config);
        assert_eq!(
            pairs,
            vec![
                ("code", "key".to_string()),
                ("redirect_uri", "key".to_string()),
                ("scope", "key".to_string()),
                ("state", "key".to_string()),
                (BEARER_TOKEN_PARAMETER, "tok".to_string()),
            ]
        );
    }

    #[test]
    fn test_token_only() {
        let config = ApiConfig::default().with_bearer_token("tok");
        assert_eq!(
            credential_pairs(&config),
            vec![(BEARER_TOKEN_PARAMETER, "tok".to_string())]
        );
    }
}
