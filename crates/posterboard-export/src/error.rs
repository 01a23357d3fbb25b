use thiserror::Error;

/// Export failures. Surfaced to the user as a visible notice; never retried
/// automatically.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Render(#[from] printpdf::Error),

    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}
