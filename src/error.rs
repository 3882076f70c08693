use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Failures raised inside the directory application.
///
/// None of these reach the client as structured errors: handlers either
/// render the dedicated error page (connection failures) or substitute a
/// placeholder value and log the rest.
#[derive(Debug, ThisError)]
pub enum DirectoryError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("unsupported object URL: {0}")]
    ObjectUrl(String),

    #[error("database connection error: {0}")]
    Connect(#[source] SqlxError),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("object download error: {0}")]
    Download(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
