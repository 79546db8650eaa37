/// Base URL of the backend, resolved at build time from `BACKEND_URL`.
/// Defaults to the local development server.
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_has_no_trailing_slash() {
        assert!(!backend_url().ends_with('/'));
    }
}
