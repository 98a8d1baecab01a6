use thiserror::Error;

/// Errors that may occur during report creation.
///
/// # Variants
///
/// * `Serialization` - An error occurred while serializing the report.
/// * `FileCreation` - An error occurred while creating the file.
/// * `FileWrite` - An error occurred while writing to the file.
#[derive(Error, Debug)]
pub enum ReportCreationError {
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to create report file: {0}")]
    FileCreation(std::io::Error),

    #[error("failed to write report file: {0}")]
    FileWrite(std::io::Error),
}
