use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{EducationLevel, ExperienceLevel, Gender, JobType, WorkMode};
use crate::error::ValidationError;
use crate::ids::RecordId;
use crate::record::{FieldValue, Record};
use crate::validate::{Validate, require};

/// Company summary embedded in a job payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCompany {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    pub company_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<JobCompany>,
    pub experience_level: ExperienceLevel,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub work_mode: WorkMode,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<u64>,
}

fn default_active() -> bool {
    true
}

impl Job {
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|company| company.name.as_str())
    }
}

impl Record for Job {
    const KIND: &'static str = "jobs";
    const DIMENSIONS: &'static [&'static str] =
        &["experienceLevel", "type", "workMode", "companyId", "status"];
    const SORT_FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "company",
        "experienceLevel",
        "type",
        "workMode",
        "postedAt",
        "remainingDays",
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::id(self.id),
            "title" => FieldValue::text(&self.title),
            "company" => self
                .company_name()
                .map_or(FieldValue::Missing, FieldValue::text),
            "companyId" => FieldValue::text(self.company_id.to_string()),
            "experienceLevel" => FieldValue::text(self.experience_level.as_str()),
            "type" => FieldValue::text(self.job_type.as_str()),
            "workMode" => FieldValue::text(self.work_mode.as_str()),
            "status" => FieldValue::text(self.status_label()),
            "description" => FieldValue::text(&self.description),
            "postedAt" => FieldValue::date(self.posted_at),
            "remainingDays" => FieldValue::number(self.remaining_days),
            _ => FieldValue::Missing,
        }
    }

    fn search_text(&self) -> &str {
        &self.title
    }
}

/// Editable job fields, posted from the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    /// Zero means "not chosen yet" and fails validation.
    pub company_id: u64,
    pub experience_level: ExperienceLevel,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub description: String,
}

impl Validate for JobDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = match require(&[("title", self.title.as_str())]) {
            Ok(()) => Vec::new(),
            Err(ValidationError::MissingFields(fields)) => fields,
            Err(other) => return Err(other),
        };
        if self.company_id == 0 {
            missing.push("companyId");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

/// A candidate's application to one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub applicant_address: String,
    /// ISO date (`YYYY-MM-DD`), passed through as entered.
    pub applicant_birth_date: String,
    pub applicant_gender: Gender,
    pub applicant_education_level: EducationLevel,
    pub applicant_experience_level: ExperienceLevel,
    pub cover_letter: String,
}

impl Validate for ApplicationDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("applicantName", self.applicant_name.as_str()),
            ("applicantEmail", self.applicant_email.as_str()),
            ("applicantPhone", self.applicant_phone.as_str()),
            ("applicantAddress", self.applicant_address.as_str()),
            ("applicantBirthDate", self.applicant_birth_date.as_str()),
            ("coverLetter", self.cover_letter.as_str()),
        ])
    }
}
