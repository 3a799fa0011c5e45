use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Server {
        url: String,
        status: u16,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("set code mismatch: expected {expected}, snapshot contains {found}")]
    SetCodeMismatch { expected: String, found: String },

    #[error("snapshot for set {set_code} unavailable: {reason}")]
    SnapshotUnavailable { set_code: String, reason: String },

    #[error("page {page} of set {set_code} reports more results but no next page link")]
    MissingNextPage { set_code: String, page: usize },
}
