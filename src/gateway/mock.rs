//! Mock gateway implementation for isolating services in tests.

use mockall::mock;

use crate::domain::lead::{Lead, LeadPayload};
use crate::domain::types::LeadId;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{LeadReader, LeadWriter};

mock! {
    pub Gateway {}

    impl LeadReader for Gateway {
        fn list_leads(&self) -> GatewayResult<Vec<Lead>>;
    }

    impl LeadWriter for Gateway {
        fn create_lead(&self, payload: &LeadPayload) -> GatewayResult<Lead>;
        fn update_lead(&self, id: LeadId, payload: &LeadPayload) -> GatewayResult<Lead>;
        fn delete_lead(&self, id: LeadId) -> GatewayResult<()>;
    }
}
