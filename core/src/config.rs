//! Client configuration supplied by the host app.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Public PokeAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the list screen's selector.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON document; omitted keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        let config: ClientConfig =
            serde_json::from_str(raw).map_err(|e| ApiError::InvalidConfig(e.to_string()))?;
        if config.page_size == 0 {
            return Err(ApiError::InvalidPageSize);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn overrides_are_applied() {
        let config =
            ClientConfig::from_json(r#"{"base_url":"http://127.0.0.1:3000/api/v2","page_size":50}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000/api/v2");
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = ClientConfig::from_json(r#"{"page_size":0}"#).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPageSize));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = ClientConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn default_page_size_is_an_option() {
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }
}
