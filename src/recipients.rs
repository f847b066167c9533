use std::path::Path;

use thiserror::Error;

/// Column holding the recipient display name. Matched case-sensitively.
pub const NAME_COLUMN: &str = "RESPONSAVEL";

/// Column holding the recipient email address. Matched case-sensitively.
pub const EMAIL_COLUMN: &str = "Contato";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(String),

    #[error("Failed to read dataset: {0}")]
    Read(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Dataset contains no recipient rows")]
    Empty,
}

/// One row of the input dataset, materialized once at batch start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// 0-based data row index, header excluded. Determines log ordering.
    pub row_index: usize,
    pub display_name: String,
    pub email_address: String,
}

impl Recipient {
    /// 1-indexed line number in the source file, accounting for the header row.
    pub fn line_number(&self) -> usize {
        self.row_index + 2
    }

    /// An address is considered sendable if it contains an `@`. Anything less
    /// is skipped with a log record rather than handed to the mailer.
    pub fn has_valid_email(&self) -> bool {
        self.email_address.contains('@')
    }
}

/// Load the recipient dataset, preserving source row order.
///
/// Cell contents are taken verbatim; the display name doubles as the
/// attachment filename stem, so no trimming or case folding is applied.
pub fn load_recipients(path: &Path) -> Result<Vec<Recipient>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let name_idx = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .ok_or(DatasetError::MissingColumn(NAME_COLUMN))?;
    let email_idx = headers
        .iter()
        .position(|h| h == EMAIL_COLUMN)
        .ok_or(DatasetError::MissingColumn(EMAIL_COLUMN))?;

    let mut recipients = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        recipients.push(Recipient {
            row_index,
            display_name: record.get(name_idx).unwrap_or("").to_string(),
            email_address: record.get(email_idx).unwrap_or("").to_string(),
        });
    }

    if recipients.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(recipients)
}
