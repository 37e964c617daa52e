//! Blocking HTTP implementation of the lead gateway.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::domain::lead::{Lead, LeadPayload};
use crate::domain::types::LeadId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{LeadReader, LeadWriter};
use crate::models::config::ClientConfig;

/// Talks to a REST server exposing `GET/POST /leads` and
/// `PUT/DELETE /leads/{id}`.
#[derive(Clone, Debug)]
pub struct HttpLeadGateway {
    base_url: String,
    client: Client,
}

impl HttpLeadGateway {
    pub fn new(config: &ClientConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::with_client(&config.api_base_url, client))
    }

    /// Uses a preconfigured HTTP client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn leads_url(&self) -> String {
        format!("{}/leads", self.base_url)
    }

    fn lead_url(&self, id: LeadId) -> String {
        format!("{}/leads/{id}", self.base_url)
    }
}

/// Turns any non-2xx response into [`GatewayError::Server`].
fn ensure_success(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    log::error!("Lead server responded with {status}: {body}");
    Err(GatewayError::Server {
        status: status.as_u16(),
        body,
    })
}

impl LeadReader for HttpLeadGateway {
    fn list_leads(&self) -> GatewayResult<Vec<Lead>> {
        let response = self.client.get(self.leads_url()).send()?;
        let leads: Vec<Lead> = ensure_success(response)?.json()?;
        log::debug!("Fetched {} leads", leads.len());
        Ok(leads)
    }
}

impl LeadWriter for HttpLeadGateway {
    fn create_lead(&self, payload: &LeadPayload) -> GatewayResult<Lead> {
        let response = self.client.post(self.leads_url()).json(payload).send()?;
        let lead: Lead = ensure_success(response)?.json()?;
        log::info!("Created lead {}", lead.id);
        Ok(lead)
    }

    fn update_lead(&self, id: LeadId, payload: &LeadPayload) -> GatewayResult<Lead> {
        let response = self.client.put(self.lead_url(id)).json(payload).send()?;
        let lead: Lead = ensure_success(response)?.json()?;
        log::info!("Updated lead {}", lead.id);
        Ok(lead)
    }

    fn delete_lead(&self, id: LeadId) -> GatewayResult<()> {
        let response = self.client.delete(self.lead_url(id)).send()?;
        ensure_success(response)?;
        log::info!("Deleted lead {id}");
        Ok(())
    }
}
