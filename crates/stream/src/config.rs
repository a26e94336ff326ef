use std::time::Duration;

/// Default platform API root.
pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Default timeout for a single upstream request.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Server-held credentials injected into every upstream call.
#[derive(Debug, Clone)]
pub struct StreamCredentials {
    pub account_id: String,
    pub api_token: String,
    /// Delivery subdomain code used in playback URLs.
    pub customer_code: String,
}

/// Video platform client settings.
#[derive(Debug, Clone)]
pub struct StreamSettings {
    /// `None` when the credentials are not configured. The proxy functions
    /// then fail per request instead of at startup.
    pub credentials: Option<StreamCredentials>,
    pub api_base: String,
    pub timeout: Duration,
}

impl StreamSettings {
    /// Load settings from environment variables.
    ///
    /// | Env Var                           | Required | Default                                |
    /// |-----------------------------------|----------|----------------------------------------|
    /// | `CLOUDFLARE_ACCOUNT_ID`           | no       | --                                     |
    /// | `CLOUDFLARE_API_TOKEN`            | no       | --                                     |
    /// | `CLOUDFLARE_STREAM_CUSTOMER_CODE` | no       | account id                             |
    /// | `CLOUDFLARE_API_BASE`             | no       | `https://api.cloudflare.com/client/v4` |
    /// | `STREAM_API_TIMEOUT_SECS`         | no       | `15`                                   |
    ///
    /// # Panics
    ///
    /// Panics if `STREAM_API_TIMEOUT_SECS` is not a valid u64.
    pub fn from_env() -> Self {
        let account_id = non_empty_var("CLOUDFLARE_ACCOUNT_ID");
        let api_token = non_empty_var("CLOUDFLARE_API_TOKEN");

        let credentials = match (account_id, api_token) {
            (Some(account_id), Some(api_token)) => {
                let customer_code = non_empty_var("CLOUDFLARE_STREAM_CUSTOMER_CODE")
                    .unwrap_or_else(|| account_id.clone());
                Some(StreamCredentials {
                    account_id,
                    api_token,
                    customer_code,
                })
            }
            _ => None,
        };

        let api_base =
            non_empty_var("CLOUDFLARE_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs: u64 = std::env::var("STREAM_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("STREAM_API_TIMEOUT_SECS must be a valid u64");

        Self {
            credentials,
            api_base,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Settings pointing at `api_base` with the given credentials.
    pub fn new(credentials: Option<StreamCredentials>, api_base: impl Into<String>) -> Self {
        Self {
            credentials,
            api_base: api_base.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
