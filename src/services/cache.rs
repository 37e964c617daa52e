//! Last fetched lead list, refetched after every invalidation.

use crate::domain::lead::Lead;
use crate::domain::types::LeadId;
use crate::gateway::LeadReader;
use crate::gateway::errors::GatewayResult;

#[derive(Debug, Default)]
pub struct LeadListCache {
    leads: Option<Vec<Lead>>,
}

impl LeadListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list, fetching it first when the cache is empty.
    ///
    /// A failed fetch leaves the cache empty.
    pub fn leads<R>(&mut self, gateway: &R) -> GatewayResult<&[Lead]>
    where
        R: LeadReader + ?Sized,
    {
        let leads = match self.leads.take() {
            Some(leads) => leads,
            None => {
                log::debug!("Lead list not cached, fetching");
                gateway.list_leads()?
            }
        };
        Ok(self.leads.insert(leads).as_slice())
    }

    /// Looks up a lead by id, fetching the list if needed.
    pub fn find<R>(&mut self, gateway: &R, id: LeadId) -> GatewayResult<Option<&Lead>>
    where
        R: LeadReader + ?Sized,
    {
        Ok(self.leads(gateway)?.iter().find(|lead| lead.id == id))
    }

    /// Looks up a lead in the cached list only.
    pub fn get(&self, id: LeadId) -> Option<&Lead> {
        self.leads.as_ref()?.iter().find(|lead| lead.id == id)
    }

    pub fn invalidate(&mut self) {
        self.leads = None;
    }

    pub fn is_cached(&self) -> bool {
        self.leads.is_some()
    }
}
