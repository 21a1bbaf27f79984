//! Enumerated categories used by the job board API.
//!
//! The API exchanges these as SCREAMING_SNAKE_CASE strings (`FULL_TIME`,
//! `FINANCE`). `as_str` returns that wire form, which is also the value used
//! by filter dimensions; `label` is the human form shown in tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation, as sent and received by the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            /// Accepts the wire form or the label, case-insensitively.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
                $(
                    if normalized == $wire || normalized == $label.to_uppercase().replace(['-', ' '], "_") {
                        return Ok($name::$variant);
                    }
                )+
                Err(ModelError::UnknownVariant {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

wire_enum! {
    /// Industry a company operates in.
    Industry, "industry" {
        Technology => ("TECHNOLOGY", "Technology"),
        Finance => ("FINANCE", "Finance"),
        Healthcare => ("HEALTHCARE", "Healthcare"),
        Education => ("EDUCATION", "Education"),
    }
}

wire_enum! {
    /// Seniority requested by a job posting or claimed by an applicant.
    ExperienceLevel, "experience level" {
        Internship => ("INTERNSHIP", "Internship"),
        Junior => ("JUNIOR", "Junior"),
        Mid => ("MID", "Mid"),
        Senior => ("SENIOR", "Senior"),
    }
}

wire_enum! {
    JobType, "job type" {
        FullTime => ("FULL_TIME", "Full-time"),
        PartTime => ("PART_TIME", "Part-time"),
        Contract => ("CONTRACT", "Contract"),
    }
}

wire_enum! {
    WorkMode, "work mode" {
        Remote => ("REMOTE", "Remote"),
        Onsite => ("ONSITE", "Onsite"),
    }
}

wire_enum! {
    Gender, "gender" {
        Male => ("MALE", "Male"),
        Female => ("FEMALE", "Female"),
        Other => ("OTHER", "Other"),
    }
}

wire_enum! {
    EducationLevel, "education level" {
        HighSchool => ("HIGH_SCHOOL", "High School"),
        Bachelor => ("BACHELOR", "Bachelor's"),
        Master => ("MASTER", "Master's"),
        Doctorate => ("DOCTORATE", "Doctorate"),
    }
}

wire_enum! {
    /// Account type returned by the login endpoint.
    UserType, "user type" {
        Admin => ("ADMIN", "Admin"),
        Candidate => ("CANDIDATE", "Candidate"),
    }
}

impl Default for Industry {
    fn default() -> Self {
        Self::Technology
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Internship
    }
}

impl Default for JobType {
    fn default() -> Self {
        Self::FullTime
    }
}

impl Default for WorkMode {
    fn default() -> Self {
        Self::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_and_label_forms() {
        assert_eq!("FINANCE".parse::<Industry>().unwrap(), Industry::Finance);
        assert_eq!("finance".parse::<Industry>().unwrap(), Industry::Finance);
        assert_eq!("full-time".parse::<JobType>().unwrap(), JobType::FullTime);
        assert_eq!("Part time".parse::<JobType>().unwrap(), JobType::PartTime);
        assert_eq!(
            "high school".parse::<EducationLevel>().unwrap(),
            EducationLevel::HighSchool
        );
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "RETAIL".parse::<Industry>().unwrap_err();
        assert_eq!(err.to_string(), "unknown industry value: RETAIL");
    }

    #[test]
    fn serde_uses_wire_form() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"FULL_TIME\"");
        let mode: WorkMode = serde_json::from_str("\"ONSITE\"").unwrap();
        assert_eq!(mode, WorkMode::Onsite);
        for level in ExperienceLevel::ALL {
            let round: ExperienceLevel =
                serde_json::from_str(&serde_json::to_string(level).unwrap()).unwrap();
            assert_eq!(&round, level);
        }
    }
}
