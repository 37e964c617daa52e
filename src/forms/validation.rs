//! Declarative validation of lead drafts.
//!
//! Every rule is an entry in [`LEAD_RULES`] or [`JOB_RULES`]: a field path and a
//! check over the enclosing lead or job. All rules run on every call and each
//! failing rule contributes exactly one message, so the caller sees every
//! problem at once. A [`NewLead`] is only assembled when no rule failed.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use validator::ValidateEmail;

use crate::domain::lead::{Job, JobType, LeadSource, NewLead, parse_follow_up_date};
use crate::domain::types::{
    CompanyName, ContactPerson, JobTitle, LeadEmail, OtherSource, PhoneNumber, SalaryRange,
    TypeConstraintError, is_valid_phone,
};
use crate::forms::lead::{JobDraft, LeadDraft};

pub const COMPANY_NAME_REQUIRED: &str = "Company name is required";
pub const CONTACT_PERSON_REQUIRED: &str = "Contact person name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Phone must be 11-13 digits";
pub const LEAD_SOURCE_REQUIRED: &str = "Lead source is required";
pub const LEAD_SOURCE_INVALID: &str =
    "Lead source must be one of: Website, Referral, Cold Call, Other";
pub const OTHER_SOURCE_REQUIRED: &str = "Please specify the other source";
pub const FOLLOW_UP_REQUIRED: &str = "Follow-up date is required";
pub const FOLLOW_UP_INVALID: &str = "Follow-up date must be a valid date";
pub const FOLLOW_UP_NOT_FUTURE: &str = "Follow-up date must be in the future";
pub const JOBS_REQUIRED: &str = "Jobs are required";
pub const JOBS_EMPTY: &str = "Add at least one job";
pub const JOB_TITLE_REQUIRED: &str = "Job title is required";
pub const JOB_TYPE_REQUIRED: &str = "Job type is required";
pub const JOB_TYPE_INVALID: &str = "Job type must be one of: Full-time, Part-time";
pub const SALARY_RANGE_REQUIRED: &str = "Salary range is required for full-time jobs";

/// Field path to message mapping produced by a failed validation.
///
/// Paths keep the order the form lays them out in, so `jobs[2]` comes
/// before `jobs[10]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    /// Message reported for `path`, e.g. `jobs[2].salaryRange`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(known, _)| known == path)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(path, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, msg)| (path.as_str(), msg.as_str()))
    }

    fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        let path = path.into();
        let message = message.into();
        match self.0.iter_mut().find(|(known, _)| *known == path) {
            Some((_, existing)) => *existing = message,
            None => self.0.push((path, message)),
        }
    }

    fn single(path: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(path, message);
        errors
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (path, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (path, message) in self.iter() {
            map.serialize_entry(path, message)?;
        }
        map.end()
    }
}

/// Message reported by a failing rule, `None` when the rule holds.
pub type RuleMessage = Option<&'static str>;

/// Rule over a whole lead draft.
pub struct LeadRule {
    pub field: &'static str,
    pub check: fn(&LeadDraft, DateTime<Utc>) -> RuleMessage,
}

/// Rule over a single job entry; reported at `jobs[i].{field}`.
pub struct JobRule {
    pub field: &'static str,
    pub check: fn(&JobDraft) -> RuleMessage,
}

pub const LEAD_RULES: &[LeadRule] = &[
    LeadRule {
        field: "companyName",
        check: check_company_name,
    },
    LeadRule {
        field: "contactPerson",
        check: check_contact_person,
    },
    LeadRule {
        field: "email",
        check: check_email,
    },
    LeadRule {
        field: "phone",
        check: check_phone,
    },
    LeadRule {
        field: "leadSource",
        check: check_lead_source,
    },
    LeadRule {
        field: "otherSource",
        check: check_other_source,
    },
    LeadRule {
        field: "followUpDate",
        check: check_follow_up_date,
    },
    LeadRule {
        field: "jobs",
        check: check_jobs,
    },
];

pub const JOB_RULES: &[JobRule] = &[
    JobRule {
        field: "title",
        check: check_job_title,
    },
    JobRule {
        field: "type",
        check: check_job_type,
    },
    JobRule {
        field: "salaryRange",
        check: check_salary_range,
    },
];

/// Trimmed text of an optional input, `None` when missing or blank.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required(value: &Option<String>, message: &'static str) -> RuleMessage {
    filled(value).is_none().then_some(message)
}

fn check_company_name(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    required(&draft.company_name, COMPANY_NAME_REQUIRED)
}

fn check_contact_person(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    required(&draft.contact_person, CONTACT_PERSON_REQUIRED)
}

fn check_email(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    match filled(&draft.email) {
        None => Some(EMAIL_REQUIRED),
        Some(email) if !email.validate_email() => Some(EMAIL_INVALID),
        Some(_) => None,
    }
}

fn check_phone(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    match filled(&draft.phone) {
        None => Some(PHONE_REQUIRED),
        Some(phone) if !is_valid_phone(phone) => Some(PHONE_INVALID),
        Some(_) => None,
    }
}

fn check_lead_source(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    match filled(&draft.lead_source) {
        None => Some(LEAD_SOURCE_REQUIRED),
        Some(source) if source.parse::<LeadSource>().is_err() => Some(LEAD_SOURCE_INVALID),
        Some(_) => None,
    }
}

fn is_other_source(draft: &LeadDraft) -> bool {
    filled(&draft.lead_source) == Some(LeadSource::Other.as_str())
}

fn check_other_source(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    if is_other_source(draft) {
        required(&draft.other_source, OTHER_SOURCE_REQUIRED)
    } else {
        None
    }
}

fn check_follow_up_date(draft: &LeadDraft, now: DateTime<Utc>) -> RuleMessage {
    let Some(raw) = filled(&draft.follow_up_date) else {
        return Some(FOLLOW_UP_REQUIRED);
    };
    match parse_follow_up_date(raw) {
        None => Some(FOLLOW_UP_INVALID),
        Some(date) if date <= now => Some(FOLLOW_UP_NOT_FUTURE),
        Some(_) => None,
    }
}

fn check_jobs(draft: &LeadDraft, _now: DateTime<Utc>) -> RuleMessage {
    match &draft.jobs {
        None => Some(JOBS_REQUIRED),
        Some(jobs) if jobs.is_empty() => Some(JOBS_EMPTY),
        Some(_) => None,
    }
}

fn check_job_title(job: &JobDraft) -> RuleMessage {
    required(&job.title, JOB_TITLE_REQUIRED)
}

fn check_job_type(job: &JobDraft) -> RuleMessage {
    match filled(&job.job_type) {
        None => Some(JOB_TYPE_REQUIRED),
        Some(job_type) if job_type.parse::<JobType>().is_err() => Some(JOB_TYPE_INVALID),
        Some(_) => None,
    }
}

fn check_salary_range(job: &JobDraft) -> RuleMessage {
    let full_time = filled(&job.job_type)
        .and_then(|job_type| job_type.parse::<JobType>().ok())
        .is_some_and(JobType::requires_salary);
    if full_time {
        required(&job.salary_range, SALARY_RANGE_REQUIRED)
    } else {
        None
    }
}

/// Validates `draft` as of `now`, reporting every failing rule.
pub fn validate(draft: &LeadDraft, now: DateTime<Utc>) -> Result<NewLead, FieldErrors> {
    let mut errors = FieldErrors::default();

    for rule in LEAD_RULES {
        if let Some(message) = (rule.check)(draft, now) {
            errors.insert(rule.field, message);
        }
    }

    for (index, job) in draft.jobs.iter().flatten().enumerate() {
        for rule in JOB_RULES {
            if let Some(message) = (rule.check)(job) {
                errors.insert(format!("jobs[{index}].{}", rule.field), message);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    build_new_lead(draft)
}

fn at(path: &str) -> impl FnOnce(TypeConstraintError) -> FieldErrors + '_ {
    move |err| FieldErrors::single(path, err.to_string())
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Assembles the typed lead once every rule has passed.
fn build_new_lead(draft: &LeadDraft) -> Result<NewLead, FieldErrors> {
    let lead_source = text(&draft.lead_source)
        .trim()
        .parse::<LeadSource>()
        .map_err(at("leadSource"))?;

    let other_source = match lead_source {
        LeadSource::Other => {
            Some(OtherSource::new(text(&draft.other_source)).map_err(at("otherSource"))?)
        }
        _ => None,
    };

    let follow_up_date = parse_follow_up_date(text(&draft.follow_up_date))
        .ok_or_else(|| FieldErrors::single("followUpDate", FOLLOW_UP_INVALID))?;

    let jobs = draft
        .jobs
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, job)| build_job(index, job))
        .collect::<Result<Vec<Job>, FieldErrors>>()?;

    Ok(NewLead {
        company_name: CompanyName::new(text(&draft.company_name)).map_err(at("companyName"))?,
        contact_person: ContactPerson::new(text(&draft.contact_person))
            .map_err(at("contactPerson"))?,
        designation: filled(&draft.designation).map(str::to_string),
        email: LeadEmail::new(text(&draft.email)).map_err(at("email"))?,
        phone: PhoneNumber::new(text(&draft.phone)).map_err(at("phone"))?,
        lead_source,
        other_source,
        follow_up_date,
        jobs,
    })
}

fn build_job(index: usize, job: &JobDraft) -> Result<Job, FieldErrors> {
    let path = |field: &str| format!("jobs[{index}].{field}");
    let on = |field: &str| {
        let path = path(field);
        move |err: TypeConstraintError| FieldErrors::single(&path, err.to_string())
    };

    Ok(Job {
        title: JobTitle::new(text(&job.title)).map_err(on("title"))?,
        job_type: text(&job.job_type).trim().parse::<JobType>().map_err(on("type"))?,
        salary_range: filled(&job.salary_range)
            .map(SalaryRange::new)
            .transpose()
            .map_err(on("salaryRange"))?,
    })
}
