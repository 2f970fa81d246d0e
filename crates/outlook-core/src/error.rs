//! Error types for Outlook

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown scenario: {0} (expected conservative, realistic or optimistic)")]
    InvalidScenario(String),

    #[error("Unsupported horizon: {0} months (expected 1, 3, 6 or 12)")]
    InvalidHorizon(u32),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is a caller contract violation (bad scenario,
    /// horizon or malformed input) rather than an environment failure
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::InvalidScenario(_)
                | Error::InvalidHorizon(_)
                | Error::InvalidData(_)
                | Error::Import(_)
                | Error::Csv(_)
                | Error::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
