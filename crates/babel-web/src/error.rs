use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Library(#[from] babel_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Serve(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// Convert to HTTP status codes for API responses
impl From<&Error> for axum::http::StatusCode {
    fn from(err: &Error) -> Self {
        use axum::http::StatusCode;
        match err {
            // every core error is a caller precondition violation
            Error::Library(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) | Error::Json(_) | Error::Serve(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
