//! Boundary to the remote `/leads` resource server.

use crate::{
    domain::{
        lead::{Lead, LeadPayload},
        types::LeadId,
    },
    gateway::errors::GatewayResult,
};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpLeadGateway;

pub trait LeadReader {
    /// Fetches every lead known to the server.
    fn list_leads(&self) -> GatewayResult<Vec<Lead>>;
}

pub trait LeadWriter {
    /// Persists a new lead; the server assigns its identifier.
    fn create_lead(&self, payload: &LeadPayload) -> GatewayResult<Lead>;
    /// Replaces the stored lead with `payload`.
    fn update_lead(&self, id: LeadId, payload: &LeadPayload) -> GatewayResult<Lead>;
    /// Removes the lead; succeeds on any 2xx response regardless of body.
    fn delete_lead(&self, id: LeadId) -> GatewayResult<()>;
}

