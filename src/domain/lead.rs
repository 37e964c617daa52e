use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::types::{
    CompanyName, ContactPerson, JobTitle, LeadEmail, LeadId, OtherSource, PhoneNumber,
    SalaryRange, TypeConstraintError,
};

/// Employment type of a job opening.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
}

impl JobType {
    pub const ALL: [JobType; 2] = [JobType::FullTime, JobType::PartTime];

    pub const fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
        }
    }

    /// Full-time jobs must carry a salary range.
    pub const fn requires_salary(self) -> bool {
        matches!(self, JobType::FullTime)
    }
}

impl Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Channel through which a lead was acquired.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadSource {
    Website,
    Referral,
    #[serde(rename = "Cold Call")]
    ColdCall,
    Other,
}

impl LeadSource {
    pub const ALL: [LeadSource; 4] = [
        LeadSource::Website,
        LeadSource::Referral,
        LeadSource::ColdCall,
        LeadSource::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Referral => "Referral",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::Other => "Other",
        }
    }
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Parses a follow-up date in any of the forms a lead form may submit.
///
/// Accepts RFC 3339 timestamps, naive date-times (taken as UTC) and plain
/// dates, which resolve to midnight UTC.
pub fn parse_follow_up_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn deserialize_follow_up_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_follow_up_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid follow-up date: {raw}")))
}

/// Treats missing, null and blank strings alike as an absent value.
fn deserialize_blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<String>,
    T::Error: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.filter(|value| !value.trim().is_empty()) {
        Some(value) => T::try_from(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Job opening attached to a lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: JobTitle,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(
        default,
        deserialize_with = "deserialize_blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary_range: Option<SalaryRange>,
}

/// Lead that passed validation and is ready to be persisted.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub company_name: CompanyName,
    pub contact_person: ContactPerson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    pub lead_source: LeadSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_source: Option<OtherSource>,
    pub follow_up_date: DateTime<Utc>,
    pub jobs: Vec<Job>,
}

/// Body sent to the gateway when creating or replacing a lead.
///
/// Timestamps are stamped on the client at submission time.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[serde(flatten)]
    pub lead: NewLead,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeadPayload {
    /// Stamps a brand new lead with `now` as both creation and update time.
    #[must_use]
    pub fn for_create(lead: NewLead, now: DateTime<Utc>) -> Self {
        Self {
            lead,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps a replacement of an existing lead, keeping its creation time.
    #[must_use]
    pub fn for_update(lead: NewLead, created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            lead,
            created_at,
            updated_at: now,
        }
    }
}

/// Lead as persisted and returned by the gateway.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub company_name: CompanyName,
    pub contact_person: ContactPerson,
    #[serde(
        default,
        deserialize_with = "deserialize_blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub designation: Option<String>,
    pub email: LeadEmail,
    pub phone: PhoneNumber,
    pub lead_source: LeadSource,
    #[serde(
        default,
        deserialize_with = "deserialize_blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub other_source: Option<OtherSource>,
    #[serde(deserialize_with = "deserialize_follow_up_date")]
    pub follow_up_date: DateTime<Utc>,
    pub jobs: Vec<Job>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
