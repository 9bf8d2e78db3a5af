//! reqwest-backed [`UpdateSourcePort`].

use std::path::Path;
use std::sync::Arc;

use adamup_core::{UpdateError, UpdateSourcePort};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::config::HttpSourceConfig;
use crate::error::{SourceError, SourceResult};

/// Progress callback for bundle downloads.
/// Called with (`downloaded_bytes`, `total_bytes`); total is 0 when unknown.
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Fetches the version file and bundle from fixed URLs.
#[derive(Clone)]
pub struct HttpUpdateSource {
    client: Client,
    config: HttpSourceConfig,
    progress: Option<ProgressCallback>,
}

impl std::fmt::Debug for HttpUpdateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUpdateSource")
            .field("config", &self.config)
            .field("progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpUpdateSource {
    /// Build the HTTP client for `config`.
    pub fn new(config: HttpSourceConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            config,
            progress: None,
        })
    }

    /// Report download progress to `callback`.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    /// The configuration this source was built with.
    pub const fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    async fn get(&self, url: &str, timeout: std::time::Duration) -> SourceResult<Response> {
        let response = self.client.get(url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// GET the version file and return its body.
    pub async fn fetch_text(&self) -> SourceResult<String> {
        let url = &self.config.version_url;
        debug!(%url, "Fetching latest version");
        let response = self.get(url, self.config.timeout).await?;
        Ok(response.text().await?)
    }

    /// Stream the bundle into `dest`, returning the number of bytes written.
    ///
    /// A partially written `dest` is removed on failure.
    pub async fn download_to(&self, dest: &Path) -> SourceResult<u64> {
        let result = self.stream_to_file(dest).await;
        if let Err(ref e) = result {
            warn!(path = %dest.display(), error = %e, "Bundle download failed, removing partial file");
            let _ = tokio::fs::remove_file(dest).await;
        }
        result
    }

    async fn stream_to_file(&self, dest: &Path) -> SourceResult<u64> {
        let url = &self.config.bundle_url;
        debug!(%url, path = %dest.display(), "Downloading bundle");

        let response = self.get(url, self.config.download_timeout).await?;
        let total_size = response.content_length().unwrap_or(0);

        let io_err = |operation: &'static str| {
            move |source: std::io::Error| SourceError::Io {
                operation,
                path: dest.to_path_buf(),
                source,
            }
        };

        let mut file = File::create(dest).await.map_err(io_err("create"))?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(io_err("write"))?;
            downloaded += chunk.len() as u64;
            if let Some(ref cb) = self.progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(io_err("flush"))?;
        debug!(bytes = downloaded, "Bundle downloaded");
        Ok(downloaded)
    }
}

#[async_trait]
impl UpdateSourcePort for HttpUpdateSource {
    async fn fetch_latest_version(&self) -> Result<String, UpdateError> {
        Ok(self.fetch_text().await?)
    }

    async fn download_bundle(&self, dest: &Path) -> Result<(), UpdateError> {
        self.download_to(dest).await?;
        Ok(())
    }
}
