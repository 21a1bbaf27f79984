pub mod auth;
pub mod collate;
pub mod company;
pub mod enums;
pub mod error;
pub mod ids;
pub mod job;
pub mod record;
pub mod team;
pub mod validate;

pub use auth::{Credentials, LoginResponse, SignupRequest};
pub use collate::{TextCollator, fold_case};
pub use company::{Company, CompanyDraft};
pub use enums::{EducationLevel, ExperienceLevel, Gender, Industry, JobType, UserType, WorkMode};
pub use error::{ModelError, Result, ValidationError};
pub use ids::RecordId;
pub use job::{ApplicationDraft, Job, JobCompany, JobDraft};
pub use record::{FieldValue, Record};
pub use team::{Location, TeamMember, roster_order, slugify};
pub use validate::Validate;
