//! Error types for the Pokédex client core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because search treats "no such
//! creature" as an empty result rather than a failure. All other non-2xx
//! responses land in `Http` with the raw status code and body for
//! debugging. Missing fields inside a well-formed record are never errors;
//! see `wire` for how those degrade.

use thiserror::Error;

/// Errors returned by `PokedexClient` parse methods and the `Pokedex` driver.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested creature does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The transport could not complete the round-trip.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape the operation expects.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A list page was requested with zero entries.
    #[error("page size must be positive")]
    InvalidPageSize,

    /// A host-supplied configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// HTTP status associated with the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::Http {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn not_found_reports_404() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        assert_eq!(ApiError::Transport("reset".into()).status(), None);
    }
}
