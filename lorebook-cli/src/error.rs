use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Schema lifecycle failure
    #[error("Schema error: {0}")]
    Schema(#[from] lorebook_db::SchemaError),

    /// Query or mutation failure
    #[error("Database error: {0}")]
    Database(#[from] lorebook_db::OperationError),

    /// CSV ingestion failure
    #[error("Import error: {0}")]
    Import(#[from] lorebook_import::ImportError),
}
