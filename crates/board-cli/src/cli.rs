//! CLI argument definitions for `jobboard`.

use std::path::PathBuf;

use board_cli::listing::ListOptions;
use board_cli::settings::Overrides;
use board_model::{EducationLevel, ExperienceLevel, Gender, Industry, JobType, WorkMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jobboard",
    version,
    about = "Browse and manage companies, jobs and the team directory",
    long_about = "Browse and manage companies, jobs and the team directory.\n\n\
                  Lists are fetched once per invocation, then filtered, sorted and\n\
                  paginated locally."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record contents (names, emails) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the jobs and companies API.
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Base URL of the team directory API.
    #[arg(long = "team-api-url", value_name = "URL", global = true)]
    pub team_api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Extra attempts for failed fetches (exponential backoff).
    #[arg(long = "retries", value_name = "N", global = true)]
    pub retries: Option<u32>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            team_api_url: self.team_api_url.clone(),
            timeout_secs: self.timeout,
            retries: self.retries,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Companies on the board.
    Companies {
        #[command(subcommand)]
        command: CompanyCommand,
    },

    /// Job postings.
    Jobs {
        #[command(subcommand)]
        command: JobCommand,
    },

    /// The team directory.
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },

    /// Sign in and store the session token.
    Login(LoginArgs),

    /// Create an account and store the session token.
    Signup(SignupArgs),

    /// Forget the stored session token.
    Logout,
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    /// List companies.
    List(ListArgs),

    /// Show one company.
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Create a company (requires login).
    Create(CompanyArgs),

    /// Edit a company (requires login).
    Update {
        #[arg(value_name = "ID")]
        id: u64,

        #[command(flatten)]
        fields: CompanyUpdateArgs,
    },

    /// Delete a company (requires login).
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// List jobs.
    List(ListArgs),

    /// Post a job (requires login).
    Post(JobArgs),

    /// Apply to a job.
    Apply(ApplyArgs),
}

#[derive(Subcommand)]
pub enum TeamCommand {
    /// List team members.
    List(ListArgs),

    /// Show one member's profile.
    Show {
        /// Profile slug (`first-last`) or numeric id.
        member: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Keep records whose DIMENSION equals VALUE. Repeat to accept several
    /// values (OR) or constrain several dimensions (AND).
    #[arg(long = "filter", value_name = "DIMENSION=VALUE")]
    pub filters: Vec<String>,

    /// Case-insensitive text search (names, titles).
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Field to sort by.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,

    /// Page to show (1-based).
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Also print the distinct values of every filter dimension.
    #[arg(long = "facets")]
    pub facets: bool,
}

impl ListArgs {
    pub fn options(&self, default_page_size: usize) -> ListOptions {
        ListOptions {
            filters: self.filters.clone(),
            search: self.search.clone(),
            sort: self.sort.clone(),
            descending: self.desc,
            page: self.page,
            page_size: self.page_size.unwrap_or(default_page_size),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CompanyArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value_t = Industry::Technology)]
    pub industry: Industry,

    #[arg(long)]
    pub website: String,

    #[arg(long)]
    pub headquarters: String,
}

#[derive(Args, Debug, Clone)]
pub struct CompanyUpdateArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub industry: Option<Industry>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub headquarters: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long = "company-id", value_name = "ID")]
    pub company_id: u64,

    #[arg(long = "experience-level", default_value_t = ExperienceLevel::Internship)]
    pub experience_level: ExperienceLevel,

    #[arg(long = "type", default_value_t = JobType::FullTime)]
    pub job_type: JobType,

    #[arg(long = "work-mode", default_value_t = WorkMode::Remote)]
    pub work_mode: WorkMode,

    #[arg(long)]
    pub description: String,
}

#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
    /// Job to apply to.
    #[arg(value_name = "JOB_ID")]
    pub job_id: u64,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    /// Date of birth, YYYY-MM-DD.
    #[arg(long = "birth-date", value_name = "DATE")]
    pub birth_date: String,

    #[arg(long)]
    pub gender: Gender,

    #[arg(long = "education-level")]
    pub education_level: EducationLevel,

    #[arg(long = "experience-level")]
    pub experience_level: ExperienceLevel,

    #[arg(long = "cover-letter")]
    pub cover_letter: String,
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug, Clone)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long = "confirm-password")]
    pub confirm_password: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
