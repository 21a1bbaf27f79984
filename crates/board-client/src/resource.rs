//! Remote resources and the user-facing fallback text for each operation.

use std::fmt;

/// Which configured base URL a resource lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Jobs,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Companies,
    Jobs,
    Team,
    Locations,
}

/// Operations the client performs against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    LoadOne,
    Create,
    Update,
    Delete,
    Apply,
}

impl Resource {
    /// Path segment appended to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Jobs => "jobs",
            Self::Team => "team",
            Self::Locations => "location",
        }
    }

    #[must_use]
    pub const fn api(self) -> Api {
        match self {
            Self::Companies | Self::Jobs => Api::Jobs,
            Self::Team | Self::Locations => Api::Team,
        }
    }

    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Companies => "company",
            Self::Jobs => "job",
            Self::Team => "team member",
            Self::Locations => "location",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Jobs => "jobs",
            Self::Team => "team members",
            Self::Locations => "locations",
        }
    }

    /// Message shown when `action` failed and the server gave no message.
    #[must_use]
    pub fn fallback_message(self, action: Action) -> String {
        match (self, action) {
            (Self::Jobs, Action::Load) => "Failed to load jobs. Please try again later.".to_string(),
            (Self::Team, Action::Load) => {
                "Could not load team members. Please try again.".to_string()
            }
            (_, Action::Load) => format!("Unable to load {}. Please try again.", self.plural()),
            (_, Action::LoadOne) => {
                format!("Unable to load {} details. Please try again.", self.singular())
            }
            (_, Action::Create) => format!("Failed to create the {}.", self.singular()),
            (_, Action::Update) => format!("Failed to update the {}.", self.singular()),
            (_, Action::Delete) => format!("Failed to delete the {}.", self.singular()),
            (_, Action::Apply) => "Failed to submit the application.".to_string(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}
