//! Compile-time deployment paths.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/copa` when served from a
/// subdirectory), the router is mounted under it. `COPA_API_BASE` points the
/// gateway at another API origin or prefix; the default is `/api`.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// API prefix handed to the client configuration.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("COPA_API_BASE").unwrap_or(copa_core::config::DEFAULT_API_BASE)
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{api_base, router_base};

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/copa/"),
            Some(String::from("/copa"))
        );
        assert_eq!(super::router_base_with_base(" / "), None);
    }

    #[test]
    fn api_base_defaults_to_api_prefix() {
        assert_eq!(api_base(), "/api");
    }
}
