//! Error type shared by the upload path and the export adapters.

use thiserror::Error;

/// Failures surfaced by the crate's fallible operations.
///
/// Rendering a well-formed record into blocks never fails; errors only come from parsing
/// uploaded data, loading fonts, producing the PDF bytes, or writing artifacts.
#[derive(Error, Debug)]
pub enum ResumeError {
    /// The uploaded structured data could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// The resume record could not be serialized.
    #[error("failed to serialize resume data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No usable font family could be loaded for the document.
    #[error("failed to load fonts: {0}")]
    FontLoad(#[source] genpdf::error::Error),

    /// genpdf failed while laying out or writing the document.
    #[error("failed to render PDF: {0}")]
    Render(#[source] genpdf::error::Error),

    /// Writing an exported artifact to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
