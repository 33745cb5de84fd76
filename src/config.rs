//! Client configuration baked in at build time.
//!
//! The browser has no process environment, so values come from `option_env!`
//! when the WASM bundle is compiled. `from_vars` takes the same inputs
//! explicitly for native builds and tests.
//!
//! - `SIGNIN_API_URL`: API base URL. Absent or blank selects the built-in mock
//!   backend.
//! - `SIGNIN_MOCK_LATENCY_MS`: simulated mock round-trip, default 600.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 600;

/// Shown on the login form while the mock backend is active.
pub const TEST_ACCOUNT_HINT: &str = "測試帳號：任意 email 格式 / 密碼需包含英數且8位以上";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; `None` means mock mode.
    pub base_url: Option<String>,
    pub mock_latency_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_vars(option_env!("SIGNIN_API_URL"), option_env!("SIGNIN_MOCK_LATENCY_MS"))
    }

    pub fn from_vars(base_url: Option<&str>, mock_latency_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        let mock_latency_ms = mock_latency_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_MOCK_LATENCY_MS);
        Self { base_url, mock_latency_ms }
    }

    /// No external API endpoint is configured.
    pub fn mock_mode(&self) -> bool {
        self.base_url.is_none()
    }

    /// Send the session cookie with API requests. The base URL may be on
    /// another origin, so requests use `credentials: include` whenever one is
    /// configured.
    pub fn include_credentials(&self) -> bool {
        self.base_url.is_some()
    }

    /// Absolute URL for `path`, or `None` in mock mode.
    pub fn endpoint(&self, path: &str) -> Option<String> {
        self.base_url.as_deref().map(|base| format!("{base}{path}"))
    }
}
