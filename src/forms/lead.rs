//! Editable lead form state.
//!
//! A [`LeadDraft`] mirrors the lead form field by field. Every value is kept
//! as raw, possibly missing text until [`LeadDraft::validate`] turns it into a
//! [`NewLead`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lead::{JobType, Lead, LeadSource, NewLead};
use crate::forms::FormError;
use crate::forms::validation::{self, FieldErrors};

/// Raw job entry of the lead form.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary_range: Option<String>,
}

impl JobDraft {
    /// Blank full-time job, the entry appended by "Add Job".
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Some(String::new()),
            job_type: Some(JobType::FullTime.as_str().to_string()),
            salary_range: Some(String::new()),
        }
    }

    /// Whether the salary range input is shown for this job.
    pub fn shows_salary_range(&self) -> bool {
        self.job_type.as_deref().map(str::trim) == Some(JobType::FullTime.as_str())
    }
}

/// Raw, unvalidated lead form values.
///
/// `LeadDraft::default()` has every field missing; use [`LeadDraft::new`] for
/// the values a freshly opened form starts with.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub lead_source: Option<String>,
    pub other_source: Option<String>,
    pub follow_up_date: Option<String>,
    pub jobs: Option<Vec<JobDraft>>,
    /// Creation time of the lead being edited, kept for the update request.
    #[serde(skip)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LeadDraft {
    /// Creation defaults: empty text, `Website` source, a single blank
    /// full-time job and a follow-up date of `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            company_name: Some(String::new()),
            contact_person: Some(String::new()),
            designation: Some(String::new()),
            email: Some(String::new()),
            phone: Some(String::new()),
            lead_source: Some(LeadSource::Website.as_str().to_string()),
            other_source: Some(String::new()),
            follow_up_date: Some(now.to_rfc3339()),
            jobs: Some(vec![JobDraft::new()]),
            created_at: None,
        }
    }

    /// Validates the draft against the current time.
    pub fn validate(&self) -> Result<NewLead, FieldErrors> {
        validation::validate(self, Utc::now())
    }

    /// Whether the "other source" input is shown.
    pub fn shows_other_source(&self) -> bool {
        self.lead_source.as_deref().map(str::trim) == Some(LeadSource::Other.as_str())
    }

    /// Appends a blank full-time job.
    pub fn add_job(&mut self) {
        self.jobs.get_or_insert_with(Vec::new).push(JobDraft::new());
    }

    /// Removes the job at `index`; the last remaining job cannot be removed.
    pub fn remove_job(&mut self, index: usize) -> Result<(), FormError> {
        let jobs = self.jobs.get_or_insert_with(Vec::new);
        if index >= jobs.len() {
            return Err(FormError::JobIndexOutOfRange(index));
        }
        if jobs.len() == 1 {
            return Err(FormError::LastJob);
        }
        jobs.remove(index);
        Ok(())
    }

    /// Applies a change event coming from the input named `name`.
    ///
    /// Job inputs are addressed either as `jobs.1.title` or `jobs[1].title`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = Some(value.into());
        let slot = match name {
            "companyName" => &mut self.company_name,
            "contactPerson" => &mut self.contact_person,
            "designation" => &mut self.designation,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "leadSource" => &mut self.lead_source,
            "otherSource" => &mut self.other_source,
            "followUpDate" => &mut self.follow_up_date,
            _ => {
                let (index, field) = parse_job_field(name)
                    .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
                let job = self
                    .jobs
                    .as_mut()
                    .and_then(|jobs| jobs.get_mut(index))
                    .ok_or(FormError::JobIndexOutOfRange(index))?;
                match field {
                    "title" => &mut job.title,
                    "type" => &mut job.job_type,
                    "salaryRange" => &mut job.salary_range,
                    _ => return Err(FormError::UnknownField(name.to_string())),
                }
            }
        };
        *slot = value;
        Ok(())
    }
}

/// Splits `jobs.1.title` / `jobs[1].title` into `(1, "title")`.
fn parse_job_field(name: &str) -> Option<(usize, &str)> {
    let rest = name.strip_prefix("jobs")?;
    let (index, field) = match rest.strip_prefix('[') {
        Some(rest) => {
            let (index, field) = rest.split_once(']')?;
            (index, field.strip_prefix('.')?)
        }
        None => rest.strip_prefix('.')?.split_once('.')?,
    };
    Some((index.parse().ok()?, field))
}

impl From<&Lead> for LeadDraft {
    /// Populates the form with a persisted lead for editing.
    fn from(lead: &Lead) -> Self {
        Self {
            company_name: Some(lead.company_name.as_str().to_string()),
            contact_person: Some(lead.contact_person.as_str().to_string()),
            designation: Some(lead.designation.clone().unwrap_or_default()),
            email: Some(lead.email.as_str().to_string()),
            phone: Some(lead.phone.as_str().to_string()),
            lead_source: Some(lead.lead_source.as_str().to_string()),
            other_source: Some(
                lead.other_source
                    .as_ref()
                    .map(|source| source.as_str().to_string())
                    .unwrap_or_default(),
            ),
            follow_up_date: Some(lead.follow_up_date.to_rfc3339()),
            jobs: Some(
                lead.jobs
                    .iter()
                    .map(|job| JobDraft {
                        title: Some(job.title.as_str().to_string()),
                        job_type: Some(job.job_type.as_str().to_string()),
                        salary_range: Some(
                            job.salary_range
                                .as_ref()
                                .map(|salary| salary.as_str().to_string())
                                .unwrap_or_default(),
                        ),
                    })
                    .collect(),
            ),
            created_at: lead.created_at,
        }
    }
}
