//! API utilities for talking to the inventory Gateway.
//!
//! Provides helpers for constructing Gateway URLs and query strings.

/// Get the base URL for Gateway requests
///
/// Constructs the base URL from the current window location, using
/// port 8000 and the `/api` prefix the Gateway serves under.
///
/// # Returns
/// - Base URL like "http://localhost:8000/api" or "https://example.com:8000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api", protocol, hostname)
}

/// Build a full Gateway URL from a path
///
/// # Example
/// ```rust
/// let url = api_url("/orders/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Ordered query-string builder. Values are percent-encoded; keys are
/// trusted literals.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Render `url` with the query string appended.
    pub fn append_to(&self, url: &str) -> String {
        if self.pairs.is_empty() {
            return url.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_without_params_returns_url() {
        assert_eq!(QueryParams::new().append_to("/orders/"), "/orders/");
    }

    #[test]
    fn append_to_preserves_order_and_encodes() {
        let mut q = QueryParams::new();
        q.set("date", "2024-03-01");
        q.set("business", "all");
        q.set("q", "blue widget");
        assert_eq!(
            q.append_to("/orders/"),
            "/orders/?date=2024-03-01&business=all&q=blue%20widget"
        );
    }
}
