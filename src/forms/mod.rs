//! Form models backing the lead editor.

use thiserror::Error;

pub mod lead;
pub mod validation;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when editing form data.
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("no job at index {0}")]
    JobIndexOutOfRange(usize),

    #[error("a lead must keep at least one job")]
    LastJob,
}
