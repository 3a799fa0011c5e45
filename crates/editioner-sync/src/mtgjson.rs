//! MTGJSON set snapshot client with an optional on-disk cache.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::FetchError;
use crate::snapshot::{SetSnapshot, parse_snapshot};

pub const DEFAULT_BASE_URL: &str = "https://mtgjson.com/api/v5";

/// Client for MTGJSON's per-set files (`<base>/<SET>.json`).
pub struct SnapshotClient {
    client: reqwest::Client,
    base_url: String,
    /// Directory holding cached `<SET>.json` files; `None` disables caching.
    cache_dir: Option<PathBuf>,
}

impl SnapshotClient {
    pub fn new(base_url: &str, cache_dir: Option<PathBuf>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir,
        })
    }

    fn url(&self, set_code: &str) -> String {
        format!("{}/{}.json", self.base_url, set_code.to_uppercase())
    }

    /// Path of the cached file for a set, if caching is enabled.
    pub fn cache_path(&self, set_code: &str) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", set_code.to_uppercase())))
    }

    /// Fetch and decode the snapshot for `set_code`.
    ///
    /// With caching, a cached copy is used when present; otherwise the file is
    /// downloaded, checked, and only then stored. Without caching the file is
    /// fetched live. A failed download yields [`FetchError::SnapshotUnavailable`].
    pub async fn fetch_snapshot(&self, set_code: &str) -> Result<SetSnapshot, FetchError> {
        let snapshot = match self.cache_path(set_code) {
            Some(path) => self.read_through_cache(set_code, &path).await?,
            None => {
                let text = self
                    .download(set_code)
                    .await
                    .map_err(|e| unavailable(set_code, e))?;
                parse_snapshot(&text, set_code)?
            }
        };

        info!(
            set_code = %snapshot.metadata.code,
            cards = snapshot.cards.len(),
            token_set_code = ?snapshot.metadata.token_set_code,
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    async fn read_through_cache(
        &self,
        set_code: &str,
        path: &Path,
    ) -> Result<SetSnapshot, FetchError> {
        if path.exists() {
            debug!(path = %path.display(), "using cached snapshot");
            let text = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FetchError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            return parse_snapshot(&text, set_code);
        }

        let text = self.download(set_code).await.map_err(|e| {
            warn!(error = %e, "snapshot download failed");
            unavailable(set_code, e)
        })?;
        // A download for the wrong set, or one that does not decode, is never cached.
        let snapshot = parse_snapshot(&text, set_code)?;
        store(path, &text)?;
        info!(path = %path.display(), "cached snapshot");
        Ok(snapshot)
    }

    async fn download(&self, set_code: &str) -> Result<String, FetchError> {
        let url = self.url(set_code);
        info!(url = %url, "downloading snapshot");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                url,
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }
}

/// Write `text` to `path` through a temporary file in the same directory, so
/// the cache never holds a partial file.
fn store(path: &Path, text: &str) -> Result<(), FetchError> {
    let io = |source: std::io::Error| FetchError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io)?;
    tmp.write_all(text.as_bytes()).map_err(io)?;
    tmp.as_file().sync_all().map_err(io)?;
    tmp.persist(path).map_err(|e| io(e.error))?;
    Ok(())
}

fn unavailable(set_code: &str, cause: FetchError) -> FetchError {
    FetchError::SnapshotUnavailable {
        set_code: set_code.to_uppercase(),
        reason: cause.to_string(),
    }
}
