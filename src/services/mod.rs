//! Lead workflows invoked by the view layer.

use thiserror::Error;

use crate::forms::validation::FieldErrors;
use crate::gateway::errors::GatewayError;

pub mod cache;
pub mod leads;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("lead not found")]
    NotFound,

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
