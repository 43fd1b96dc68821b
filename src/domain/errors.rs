//! Domain errors. Used by ports, adapters and use cases.
//!
//! Transport failures are kept apart from what the server said, so a caller
//! can tell a broken connection from a rejected request.

use thiserror::Error;

/// The substrate could not carry a request to the server and back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request queue is closed")]
    Closed,

    #[error("response handle dropped before a response arrived")]
    Dropped,

    #[error("transport failure: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with an explicit error.
    #[error("{request} failed with RPC error {code}: {message}")]
    Rpc {
        request: &'static str,
        code: i32,
        message: String,
    },

    /// The server answered with a variant the request never produces.
    #[error("{request} returned unexpected {actual}")]
    UnexpectedResponse {
        request: &'static str,
        actual: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("catch-up did not converge after {passes} passes")]
    CatchUpExhausted { passes: u32 },

    /// `inputChannelEmpty` names no channel to catch up.
    #[error("channel reference is empty")]
    EmptyChannel,
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        DomainError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts() {
        let err: DomainError = TransportError::Dropped.into();
        assert!(matches!(err, DomainError::Transport(TransportError::Dropped)));
    }

    #[test]
    fn test_rpc_error_message() {
        let err = DomainError::Rpc {
            request: "contacts.resolveUsername",
            code: 400,
            message: "USERNAME_NOT_OCCUPIED".into(),
        };
        assert_eq!(
            err.to_string(),
            "contacts.resolveUsername failed with RPC error 400: USERNAME_NOT_OCCUPIED"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: DomainError = config::ConfigError::Message("missing file".into()).into();
        assert!(matches!(err, DomainError::Config(ref m) if m.contains("missing file")));
    }
}
