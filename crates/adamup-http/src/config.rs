//! Configuration for the HTTP update source.

use std::time::Duration;

use adamup_core::UpdaterConfig;

/// Configuration for [`crate::HttpUpdateSource`].
///
/// # Example
///
/// ```
/// use adamup_http::HttpSourceConfig;
/// use std::time::Duration;
///
/// let config = HttpSourceConfig::new("https://a/version.txt", "https://a/ext.vsix")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-updater/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Plaintext version file
    pub(crate) version_url: String,
    /// Installable bundle
    pub(crate) bundle_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Timeout for establishing a connection
    pub(crate) connect_timeout: Duration,
    /// Timeout for the whole version request
    pub(crate) timeout: Duration,
    /// Timeout for the whole bundle download
    pub(crate) download_timeout: Duration,
}

impl HttpSourceConfig {
    /// Create a configuration for the two endpoints with default timeouts.
    #[must_use]
    pub fn new(version_url: impl Into<String>, bundle_url: impl Into<String>) -> Self {
        Self {
            version_url: version_url.into(),
            bundle_url: bundle_url.into(),
            user_agent: concat!("adamup/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            download_timeout: Duration::from_secs(600),
        }
    }

    /// Take the endpoints from the updater configuration.
    #[must_use]
    pub fn from_updater_config(config: &UpdaterConfig) -> Self {
        Self::new(&config.version_url, &config.bundle_url)
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the version request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the bundle download timeout.
    ///
    /// Defaults to 10 minutes.
    #[must_use]
    pub const fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    /// The version file URL.
    pub fn version_url(&self) -> &str {
        &self.version_url
    }

    /// The bundle URL.
    pub fn bundle_url(&self) -> &str {
        &self.bundle_url
    }
}
