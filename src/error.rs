use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("failed to read picked image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to edit picked image {path}: {source}")]
    Edit {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("image {path} is empty")]
    Empty { path: String },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("vision API key is not configured")]
    MissingCredential,
    #[error("failed to encode image: {0}")]
    Encoding(#[from] EncodingError),
    #[error("request to vision API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vision API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("vision API reported error {code}: {message}")]
    Api { code: i32, message: String },
    #[error("malformed vision API response: {0}")]
    MalformedResponse(String),
}
