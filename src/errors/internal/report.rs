use thiserror::Error;

/// Report workflow failures
#[derive(Error, Debug)]
pub enum ReportError {
    /// The caller does not own the report it tried to edit
    #[error("report {0} belongs to another user")]
    NotOwner(String),

    /// Owner edits are only allowed while the report is pending or rejected
    #[error("report {0} is no longer editable")]
    NotEditable(String),
}
