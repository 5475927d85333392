//! Error taxonomy shared by the session store, the API gateway and the views.

use thiserror::Error;

/// Fallback shown on the login form when the server gives no message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Erro ao fazer login";

/// Failures of the league API gateway.
///
/// Only [`ApiError::Unauthorized`] has global consequences (forced logout);
/// every other variant is handled locally by the view that issued the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Network drops and server-side failures are worth one more attempt.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Unauthorized | Self::Decode(_) => false,
        }
    }

    /// Message supplied by the server in its `erro` field, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(reason) => Self::Network(reason),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Failure raised by a [`crate::transport::Transport`] before any HTTP status exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

/// Authentication failures surfaced inline on the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    /// Map a gateway failure to the message the login form shows.
    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        Self::Rejected(
            err.server_message()
                .map_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string(), str::to_string),
        )
    }
}

/// Durable client storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_covers_network_and_server_errors_only() {
        assert!(ApiError::Network("offline".into()).is_transient());
        assert!(
            ApiError::Status {
                status: 503,
                message: None
            }
            .is_transient()
        );
        assert!(
            !ApiError::Status {
                status: 404,
                message: None
            }
            .is_transient()
        );
        assert!(!ApiError::Unauthorized.is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn auth_error_prefers_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Credenciais inválidas".into()),
        };
        assert_eq!(
            AuthError::from_api(&err),
            AuthError::Rejected("Credenciais inválidas".into())
        );
        assert_eq!(
            AuthError::from_api(&ApiError::Network("down".into())),
            AuthError::Rejected(LOGIN_FALLBACK_MESSAGE.into())
        );
    }
}
