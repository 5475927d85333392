use crate::error::TransportError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully-resolved outbound call handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value for the `Authorization` header, when a token is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends HTTP requests; the browser uses `fetch`, tests use scripted fakes.
/// Platform-specific implementations should provide this
#[async_trait(?Send)]
pub trait Transport {
    /// Perform one request.
    ///
    /// # Errors
    ///
    /// Returns an error when no HTTP response was received at all.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_uses_bearer_scheme() {
        let req = HttpRequest {
            method: Method::Get,
            url: "/api/escolas".into(),
            bearer: Some("tok".into()),
            body: None,
        };
        assert_eq!(req.authorization().as_deref(), Some("Bearer tok"));
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert!(
            HttpResponse {
                status: 204,
                body: String::new()
            }
            .is_success()
        );
    }
}
