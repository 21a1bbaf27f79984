use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Industry;
use crate::error::ValidationError;
use crate::ids::RecordId;
use crate::record::{FieldValue, Record};
use crate::validate::{Validate, require};

/// A company as served by the companies endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    pub industry: Industry,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub headquarters: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Company {
    const KIND: &'static str = "companies";
    const DIMENSIONS: &'static [&'static str] = &["industry", "headquarters"];
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "name", "industry", "headquarters", "createdAt"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::id(self.id),
            "name" => FieldValue::text(&self.name),
            "industry" => FieldValue::text(self.industry.as_str()),
            "website" => FieldValue::text(&self.website),
            "headquarters" => FieldValue::text(&self.headquarters),
            "createdAt" => FieldValue::date(self.created_at),
            _ => FieldValue::Missing,
        }
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

/// Editable company fields, sent on create (`POST`) and update (`PUT`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: String,
    pub industry: Industry,
    pub website: String,
    pub headquarters: String,
}

impl CompanyDraft {
    /// Pre-fills an edit form from a fetched company.
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            industry: company.industry,
            website: company.website.clone(),
            headquarters: company.headquarters.clone(),
        }
    }
}

impl Validate for CompanyDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("name", self.name.as_str()),
            ("website", self.website.as_str()),
            ("headquarters", self.headquarters.as_str()),
        ])
    }
}
