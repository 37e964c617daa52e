use chrono::{DateTime, Utc};

use crate::domain::lead::{Lead, LeadPayload};
use crate::domain::types::LeadId;
use crate::dto::leads::LeadListPage;
use crate::forms::lead::LeadDraft;
use crate::forms::validation;
use crate::gateway::{LeadReader, LeadWriter};
use crate::services::cache::LeadListCache;
use crate::services::{ServiceError, ServiceResult};
use crate::store::UiStore;

pub const FETCH_FAILED: &str = "Failed to fetch leads";
pub const CREATE_FAILED: &str = "Failed to create lead";
pub const UPDATE_FAILED: &str = "Failed to update lead";
pub const DELETE_FAILED: &str = "Failed to delete lead";
pub const LEAD_CREATED: &str = "Lead created successfully";
pub const LEAD_UPDATED: &str = "Lead updated successfully";

/// Loads the rows of the lead table, using the cached list when available.
pub fn load_leads<R>(
    gateway: &R,
    cache: &mut LeadListCache,
    store: &mut UiStore,
) -> ServiceResult<LeadListPage>
where
    R: LeadReader + ?Sized,
{
    let leads = cache.leads(gateway).map_err(|err| {
        log::error!("Failed to fetch leads: {err}");
        store.show_error_toast(FETCH_FAILED);
        err
    })?;

    Ok(LeadListPage::from_leads(leads))
}

/// Opens the modal in creation mode and returns the form defaults.
pub fn open_new_lead_form(store: &mut UiStore, now: DateTime<Utc>) -> LeadDraft {
    store.clear_selection();
    store.open_modal();
    LeadDraft::new(now)
}

/// Opens the modal in edit mode with the form populated from the lead.
pub fn open_edit_lead_form<R>(
    gateway: &R,
    cache: &mut LeadListCache,
    store: &mut UiStore,
    lead_id: i32,
) -> ServiceResult<LeadDraft>
where
    R: LeadReader + ?Sized,
{
    let lead_id = LeadId::new(lead_id)?;

    let lead = cache
        .find(gateway, lead_id)
        .map_err(|err| {
            log::error!("Failed to fetch leads: {err}");
            store.show_error_toast(FETCH_FAILED);
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let draft = LeadDraft::from(lead);
    store.select_lead(lead_id);
    store.open_modal();

    Ok(draft)
}

/// Validates the draft and persists it.
///
/// Creates a new lead, or replaces the selected one when the form is in edit
/// mode. Validation failures are returned as [`ServiceError::Validation`]
/// without contacting the gateway or touching the store.
pub fn submit_lead<R>(
    gateway: &R,
    cache: &mut LeadListCache,
    store: &mut UiStore,
    draft: &LeadDraft,
    now: DateTime<Utc>,
) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let new_lead = validation::validate(draft, now)?;

    let (lead, message) = match store.selected_lead_id() {
        Some(lead_id) => {
            let created_at = draft
                .created_at
                .or_else(|| cache.get(lead_id).and_then(|lead| lead.created_at))
                .unwrap_or(now);
            let payload = LeadPayload::for_update(new_lead, created_at, now);
            let lead = gateway.update_lead(lead_id, &payload).map_err(|err| {
                log::error!("Failed to update lead {lead_id}: {err}");
                store.show_error_toast(UPDATE_FAILED);
                err
            })?;
            store.clear_selection();
            (lead, LEAD_UPDATED)
        }
        None => {
            let payload = LeadPayload::for_create(new_lead, now);
            let lead = gateway.create_lead(&payload).map_err(|err| {
                log::error!("Failed to create lead: {err}");
                store.show_error_toast(CREATE_FAILED);
                err
            })?;
            (lead, LEAD_CREATED)
        }
    };

    cache.invalidate();
    store.close_modal();
    store.show_success_toast(message);

    Ok(lead)
}

/// Deletes a lead and invalidates the cached list.
pub fn delete_lead<R>(
    gateway: &R,
    cache: &mut LeadListCache,
    store: &mut UiStore,
    lead_id: i32,
) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    let lead_id = LeadId::new(lead_id)?;

    gateway.delete_lead(lead_id).map_err(|err| {
        log::error!("Failed to delete lead {lead_id}: {err}");
        store.show_error_toast(DELETE_FAILED);
        err
    })?;

    cache.invalidate();
    if store.selected_lead_id() == Some(lead_id) {
        store.clear_selection();
    }

    Ok(())
}
