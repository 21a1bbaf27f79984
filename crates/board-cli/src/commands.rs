use std::num::NonZeroUsize;

use anyhow::{Context, Result, anyhow, bail};
use board_cli::listing::{JOBS_DEFAULT_SORT, ListOptions, apply_options, facets};
use board_cli::logging::redact_value;
use board_cli::render::{
    TableRow, company_details, detail_table, print_facets, print_page, team_member_details,
};
use board_client::{
    Action, ApiClient, ClientSettings, FetchError, Resource, Session, SessionStore, spawn_load,
};
use board_model::{
    ApplicationDraft, Company, CompanyDraft, Credentials, Job, JobDraft, LoginResponse, Record,
    RecordId, SignupRequest, TeamMember,
};
use board_query::{CollectionStore, DEFAULT_PAGE_SIZE};
use chrono::Utc;
use tracing::{info, info_span, trace};

use crate::cli::{
    ApplyArgs, CompanyArgs, CompanyCommand, CompanyUpdateArgs, JobArgs, JobCommand, LoginArgs,
    SignupArgs, TeamCommand,
};

/// Everything a command needs, built once per invocation.
pub struct App {
    pub client: ApiClient,
    pub settings: ClientSettings,
    pub sessions: SessionStore,
    pub session: Session,
}

impl App {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = ApiClient::new(&settings).context("create HTTP client")?;
        let sessions = SessionStore::new(settings.session_path());
        let session = sessions.load().context("read session")?;
        Ok(Self {
            client,
            settings,
            sessions,
            session,
        })
    }

    fn require_login(&self) -> Result<()> {
        self.session.require_signed_in()?;
        Ok(())
    }
}

/// Turns a client error into the text shown to the user.
fn user_error(err: &FetchError, resource: Resource, action: Action) -> anyhow::Error {
    anyhow!(err.display_message(&resource.fallback_message(action)))
}

// =============================================================================
// List flow
// =============================================================================

/// Loads a collection on a worker thread, applies the list flags, and prints
/// the page. The same flow serves every resource.
fn load_store<R, F>(app: &App, resource: Resource, fetch: F) -> Result<CollectionStore<R>>
where
    R: Record + Send + 'static,
    F: FnOnce(&ApiClient) -> board_client::Result<Vec<R>> + Send + 'static,
{
    let page_size = NonZeroUsize::new(app.settings.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
    let mut store = CollectionStore::with_page_size(page_size);
    let client = app.client.clone();
    let pending = spawn_load(&mut store, move || fetch(&client));
    pending.finish(&mut store, &resource.fallback_message(Action::Load));
    if let Some(message) = store.state().error_message() {
        bail!("{message}");
    }
    Ok(store)
}

fn run_list<R, F>(
    app: &App,
    resource: Resource,
    options: &ListOptions,
    show_facets: bool,
    fetch: F,
) -> Result<()>
where
    R: Record + TableRow + Send + 'static,
    F: FnOnce(&ApiClient) -> board_client::Result<Vec<R>> + Send + 'static,
{
    let span = info_span!("list", resource = resource.path());
    let _guard = span.enter();

    let mut store = load_store(app, resource, fetch)?;
    apply_options(&mut store, options)?;

    let view = store.view();
    info!(
        matches = view.total_matches,
        page = view.current_page,
        pages = view.total_pages,
        "list ready"
    );
    print_page(&view);
    if show_facets {
        print_facets(&facets(store.records()));
    }
    Ok(())
}

// =============================================================================
// Companies
// =============================================================================

pub fn run_companies(app: &App, command: &CompanyCommand) -> Result<()> {
    match command {
        CompanyCommand::List(args) => {
            let options = args.options(app.settings.page_size);
            run_list::<Company, _>(app, Resource::Companies, &options, args.facets, |c| {
                c.fetch_collection(Resource::Companies)
            })
        }
        CompanyCommand::Show { id } => show_company(app, RecordId::new(*id)),
        CompanyCommand::Create(args) => create_company(app, args),
        CompanyCommand::Update { id, fields } => update_company(app, RecordId::new(*id), fields),
        CompanyCommand::Delete { id } => delete_company(app, RecordId::new(*id)),
    }
}

fn show_company(app: &App, id: RecordId) -> Result<()> {
    let company: Company = app
        .client
        .fetch_one(Resource::Companies, id)
        .map_err(|e| user_error(&e, Resource::Companies, Action::LoadOne))?;
    println!("{}", detail_table(&company_details(&company)));
    Ok(())
}

fn create_company(app: &App, args: &CompanyArgs) -> Result<()> {
    app.require_login()?;
    let draft = CompanyDraft {
        name: args.name.clone(),
        industry: args.industry,
        website: args.website.clone(),
        headquarters: args.headquarters.clone(),
    };
    app.client
        .create(Resource::Companies, &draft)
        .map_err(|e| user_error(&e, Resource::Companies, Action::Create))?;
    info!(name = redact_value(&draft.name), "company created");
    println!("Company created.");
    Ok(())
}

fn update_company(app: &App, id: RecordId, fields: &CompanyUpdateArgs) -> Result<()> {
    app.require_login()?;
    let company: Company = app
        .client
        .fetch_one(Resource::Companies, id)
        .map_err(|e| user_error(&e, Resource::Companies, Action::LoadOne))?;

    let mut draft = CompanyDraft::from_company(&company);
    if let Some(name) = &fields.name {
        draft.name.clone_from(name);
    }
    if let Some(industry) = fields.industry {
        draft.industry = industry;
    }
    if let Some(website) = &fields.website {
        draft.website.clone_from(website);
    }
    if let Some(headquarters) = &fields.headquarters {
        draft.headquarters.clone_from(headquarters);
    }

    app.client
        .update(Resource::Companies, id, &draft)
        .map_err(|e| user_error(&e, Resource::Companies, Action::Update))?;
    println!("Company {id} updated.");
    Ok(())
}

/// Deletes remotely, then drops the record from the loaded list and shows
/// what is left.
fn delete_company(app: &App, id: RecordId) -> Result<()> {
    app.require_login()?;
    let mut store = load_store::<Company, _>(app, Resource::Companies, |c| {
        c.fetch_collection(Resource::Companies)
    })?;
    let name = store
        .find(id)
        .map(|company| company.name.clone())
        .ok_or_else(|| anyhow!("No company with id {id}."))?;

    app.client
        .delete(Resource::Companies, id)
        .map_err(|e| user_error(&e, Resource::Companies, Action::Delete))?;
    store.remove_by_id(id);
    trace!(name = redact_value(&name), "removed from list");

    println!("Deleted {name}.");
    print_page(&store.view());
    Ok(())
}

// =============================================================================
// Jobs
// =============================================================================

pub fn run_jobs(app: &App, command: &JobCommand) -> Result<()> {
    match command {
        JobCommand::List(args) => {
            let options = args
                .options(app.settings.page_size)
                .with_default_sort(JOBS_DEFAULT_SORT);
            run_list::<Job, _>(app, Resource::Jobs, &options, args.facets, |c| {
                c.fetch_collection(Resource::Jobs)
            })
        }
        JobCommand::Post(args) => post_job(app, args),
        JobCommand::Apply(args) => apply_to_job(app, args),
    }
}

fn post_job(app: &App, args: &JobArgs) -> Result<()> {
    app.require_login()?;
    let draft = JobDraft {
        title: args.title.clone(),
        company_id: args.company_id,
        experience_level: args.experience_level,
        job_type: args.job_type,
        work_mode: args.work_mode,
        description: args.description.clone(),
    };
    app.client
        .create(Resource::Jobs, &draft)
        .map_err(|e| user_error(&e, Resource::Jobs, Action::Create))?;
    println!("Job posted.");
    Ok(())
}

fn apply_to_job(app: &App, args: &ApplyArgs) -> Result<()> {
    let application = ApplicationDraft {
        applicant_name: args.name.clone(),
        applicant_email: args.email.clone(),
        applicant_phone: args.phone.clone(),
        applicant_address: args.address.clone(),
        applicant_birth_date: args.birth_date.clone(),
        applicant_gender: args.gender,
        applicant_education_level: args.education_level,
        applicant_experience_level: args.experience_level,
        cover_letter: args.cover_letter.clone(),
    };
    app.client
        .apply(RecordId::new(args.job_id), &application)
        .map_err(|e| user_error(&e, Resource::Jobs, Action::Apply))?;
    println!("Application submitted.");
    Ok(())
}

// =============================================================================
// Team directory
// =============================================================================

pub fn run_team(app: &App, command: &TeamCommand) -> Result<()> {
    match command {
        TeamCommand::List(args) => {
            let options = args.options(app.settings.page_size);
            run_list::<TeamMember, _>(app, Resource::Team, &options, args.facets, |c| {
                c.fetch_team(Utc::now())
            })
        }
        TeamCommand::Show { member } => show_team_member(app, member),
    }
}

/// Profile of one member, looked up by slug or id in the normalized
/// directory.
fn show_team_member(app: &App, reference: &str) -> Result<()> {
    let store = load_store::<TeamMember, _>(app, Resource::Team, |c| c.fetch_team(Utc::now()))?;
    let member = store
        .records()
        .iter()
        .find(|member| member.matches_reference(reference))
        .ok_or_else(|| anyhow!("No team member matches {reference}."))?;
    println!("{}", detail_table(&team_member_details(member)));
    Ok(())
}

// =============================================================================
// Session
// =============================================================================

pub fn run_login(app: &App, args: &LoginArgs) -> Result<()> {
    let credentials = Credentials {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let response = app
        .client
        .login(&credentials)
        .map_err(|e| anyhow!(e.display_message("Login failed. Please try again.")))?;
    store_session(app, &response)
}

pub fn run_signup(app: &App, args: &SignupArgs) -> Result<()> {
    let request = SignupRequest {
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    };
    let response = app
        .client
        .signup(&request)
        .map_err(|e| anyhow!(e.display_message("Signup failed. Please try again.")))?;
    store_session(app, &response)
}

fn store_session(app: &App, response: &LoginResponse) -> Result<()> {
    app.sessions
        .save_token(&response.token)
        .context("save session")?;
    println!("Signed in as {}.", response.user_type.label());
    Ok(())
}

pub fn run_logout(app: &App) -> Result<()> {
    app.sessions.clear().context("clear session")?;
    println!("Signed out.");
    Ok(())
}
