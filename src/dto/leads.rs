//! DTOs shaped for the lead table.

use serde::Serialize;

use crate::domain::lead::Lead;
use crate::domain::types::LeadId;

/// Column headers of the lead table, in display order.
pub const LEAD_COLUMNS: [&str; 7] = [
    "Company Name",
    "Contact Person",
    "Email",
    "Phone",
    "Lead Source",
    "Follow-up Date",
    "Actions",
];

/// A single table row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeadRow {
    pub id: LeadId,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub lead_source: String,
    /// Follow-up date rendered as `YYYY-MM-DD`.
    pub follow_up_date: String,
}

impl From<&Lead> for LeadRow {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id,
            company_name: lead.company_name.to_string(),
            contact_person: lead.contact_person.to_string(),
            email: lead.email.to_string(),
            phone: lead.phone.to_string(),
            lead_source: lead.lead_source.to_string(),
            follow_up_date: lead.follow_up_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Data required to render the lead list.
#[derive(Debug, Default)]
pub struct LeadListPage {
    pub rows: Vec<LeadRow>,
}

impl LeadListPage {
    pub fn from_leads(leads: &[Lead]) -> Self {
        Self {
            rows: leads.iter().map(LeadRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::lead::{Job, JobType, LeadSource};
    use crate::domain::types::{CompanyName, ContactPerson, JobTitle, LeadEmail, PhoneNumber};

    #[test]
    fn row_formats_follow_up_as_date() {
        let lead = Lead {
            id: LeadId::new(9).unwrap(),
            company_name: CompanyName::new("Acme").unwrap(),
            contact_person: ContactPerson::new("Jo").unwrap(),
            designation: None,
            email: LeadEmail::new("jo@acme.com").unwrap(),
            phone: PhoneNumber::new("01700000000").unwrap(),
            lead_source: LeadSource::ColdCall,
            other_source: None,
            follow_up_date: Utc.with_ymd_and_hms(2026, 11, 2, 15, 45, 0).unwrap(),
            jobs: vec![Job {
                title: JobTitle::new("Intern").unwrap(),
                job_type: JobType::PartTime,
                salary_range: None,
            }],
            created_at: None,
            updated_at: None,
        };

        let page = LeadListPage::from_leads(std::slice::from_ref(&lead));

        assert_eq!(page.rows.len(), 1);
        let row = &page.rows[0];
        assert_eq!(row.id.get(), 9);
        assert_eq!(row.lead_source, "Cold Call");
        assert_eq!(row.follow_up_date, "2026-11-02");
        assert_eq!(LEAD_COLUMNS.len(), 7);
    }
}
