//! Client configuration and builder pattern.

use crate::bulk::BulkFileFormat;
use crate::error::{Result, SwcError};
use std::env;
use std::time::Duration;

/// Default location of the published bulk snapshot files.
pub const DEFAULT_BULK_FILE_BASE_URL: &str =
    "https://raw.githubusercontent.com/sportsworldcentral/portfolio-project/main/bulk/";

/// Configuration for the SWC client.
///
/// Immutable once built; the client keeps its own copy. Construct through
/// [`SwcConfig::builder`] or [`SwcConfig::from_env`].
#[derive(Debug, Clone)]
pub struct SwcConfig {
    /// Base URL of the SWC API server (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Whether failed calls are retried with exponential backoff (default: true)
    pub backoff: bool,
    /// Total time budget for retries of a single call (default: 30 seconds)
    pub backoff_max_time: Duration,
    /// First retry wait before doubling begins (default: 500ms)
    pub backoff_initial_delay: Duration,
    /// Ceiling on a single retry wait (default: 10 seconds)
    pub backoff_max_delay: Duration,
    /// File format of the bulk snapshot exports (default: csv)
    pub bulk_file_format: BulkFileFormat,
    /// Base URL the bulk snapshot files are served from
    pub bulk_file_base_url: String,
    /// Per-request timeout (default: 30 seconds)
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for SwcConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            backoff: true,
            backoff_max_time: Duration::from_secs(30),
            backoff_initial_delay: Duration::from_millis(500),
            backoff_max_delay: Duration::from_secs(10),
            bulk_file_format: BulkFileFormat::Csv,
            bulk_file_base_url: DEFAULT_BULK_FILE_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("swc-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SwcConfig {
    /// Create a new configuration builder.
    pub fn builder(base_url: impl Into<String>) -> SwcConfigBuilder {
        SwcConfigBuilder::new(base_url)
    }

    /// Minimum allowed timeout value.
    pub const MIN_TIMEOUT: Duration = Duration::from_millis(100);

    /// Read configuration from the process environment.
    ///
    /// Recognized variables: `SWC_BASE_URL`, `SWC_BACKOFF`,
    /// `SWC_BACKOFF_MAX_TIME` (seconds), `SWC_BULK_FILE_FORMAT`. Unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(value) = env::var("SWC_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = env::var("SWC_BACKOFF") {
            config.backoff = parse_bool("SWC_BACKOFF", &value)?;
        }
        if let Ok(value) = env::var("SWC_BACKOFF_MAX_TIME") {
            let seconds: u64 = value.parse().map_err(|_| {
                SwcError::Config(format!(
                    "SWC_BACKOFF_MAX_TIME must be a whole number of seconds, got {value:?}"
                ))
            })?;
            config.backoff_max_time = Duration::from_secs(seconds);
        }
        if let Ok(value) = env::var("SWC_BULK_FILE_FORMAT") {
            config.bulk_file_format = BulkFileFormat::from_name(&value);
        }
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(SwcError::Config("base_url cannot be empty".to_string()));
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| SwcError::Config(format!("invalid base_url: {e}")))?;

        url::Url::parse(&self.bulk_file_base_url)
            .map_err(|e| SwcError::Config(format!("invalid bulk_file_base_url: {e}")))?;

        if self.backoff_initial_delay > self.backoff_max_delay {
            return Err(SwcError::Config(format!(
                "backoff_initial_delay ({:?}) must be <= backoff_max_delay ({:?})",
                self.backoff_initial_delay, self.backoff_max_delay
            )));
        }

        if self.timeout < Self::MIN_TIMEOUT {
            return Err(SwcError::Config(format!(
                "timeout ({:?}) must be >= {:?}",
                self.timeout,
                Self::MIN_TIMEOUT
            )));
        }

        Ok(())
    }

    /// Canonicalize URL fields so path joining stays unambiguous: the API
    /// base carries no trailing slash, the bulk base exactly one.
    fn normalize(&mut self) {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if !self.bulk_file_base_url.ends_with('/') {
            self.bulk_file_base_url.push('/');
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SwcError::Config(format!(
            "{name} must be a boolean, got {value:?}"
        ))),
    }
}

/// Builder for client configuration.
#[derive(Debug)]
pub struct SwcConfigBuilder {
    config: SwcConfig,
}

impl SwcConfigBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: SwcConfig {
                base_url: base_url.into(),
                ..Default::default()
            },
        }
    }

    /// Enable or disable retry with exponential backoff.
    pub fn backoff(mut self, backoff: bool) -> Self {
        self.config.backoff = backoff;
        self
    }

    /// Set the total time budget for retries of a single call.
    pub fn backoff_max_time(mut self, max_time: Duration) -> Self {
        self.config.backoff_max_time = max_time;
        self
    }

    /// Set the first retry wait.
    pub fn backoff_initial_delay(mut self, delay: Duration) -> Self {
        self.config.backoff_initial_delay = delay;
        self
    }

    /// Set the ceiling on a single retry wait.
    pub fn backoff_max_delay(mut self, delay: Duration) -> Self {
        self.config.backoff_max_delay = delay;
        self
    }

    /// Set the bulk file format.
    pub fn bulk_file_format(mut self, format: BulkFileFormat) -> Self {
        self.config.bulk_file_format = format;
        self
    }

    /// Set the base URL the bulk snapshot files are served from.
    pub fn bulk_file_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.bulk_file_base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration, validating all settings.
    pub fn build(mut self) -> Result<SwcConfig> {
        self.config.normalize();
        self.config.validate()?;
        Ok(self.config)
    }
}
