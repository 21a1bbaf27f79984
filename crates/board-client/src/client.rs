//! Blocking HTTP client for the job board and team directory APIs.

use std::time::{Duration, Instant};

use board_model::{
    ApplicationDraft, Credentials, Location, LoginResponse, Record, RecordId, SignupRequest,
    TeamMember, Validate,
};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ClientSettings;
use crate::error::{FetchError, Result};
use crate::resource::{Api, Resource};
use crate::response::{check_status, decode_collection, decode_envelope, decode_one};
use crate::retry::RetryPolicy;
use crate::team::{TeamCategory, normalize};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("jobboard/", env!("CARGO_PKG_VERSION"));

/// Status and body of a response that passed the status check.
struct Reply {
    status: u16,
    body: String,
}

/// Client for every remote operation the board performs.
///
/// Reads (`fetch_*`) go through the retry policy; writes are sent once.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    jobs_api: String,
    team_api: String,
    auth_api: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let timeout = settings.timeout();
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            jobs_api: trim_base(&settings.jobs_api_url),
            team_api: trim_base(&settings.team_api_url),
            auth_api: trim_base(settings.auth_url()),
            timeout,
            retry: settings.retry.policy(),
        })
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn base(&self, api: Api) -> &str {
        match api {
            Api::Jobs => &self.jobs_api,
            Api::Team => &self.team_api,
        }
    }

    /// `{base}/{resource}` or `{base}/{resource}/{id}`.
    #[must_use]
    pub fn url(&self, resource: Resource, id: Option<RecordId>) -> String {
        let base = self.base(resource.api());
        match id {
            Some(id) => format!("{base}/{}/{id}", resource.path()),
            None => format!("{base}/{}", resource.path()),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Fetches a whole collection, deduplicated by id, in server order.
    pub fn fetch_collection<R>(&self, resource: Resource) -> Result<Vec<R>>
    where
        R: Record + DeserializeOwned,
    {
        let started = Instant::now();
        let reply = self.get(&self.url(resource, None))?;
        let records: Vec<R> = decode_collection(&reply.body)?;
        info!(
            resource = resource.path(),
            count = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "collection loaded"
        );
        Ok(records)
    }

    pub fn fetch_one<R: DeserializeOwned>(&self, resource: Resource, id: RecordId) -> Result<R> {
        let reply = self.get(&self.url(resource, Some(id)))?;
        decode_one(&reply.body)
    }

    /// Fetches an endpoint that wraps its payload in `{success, data}`.
    pub fn fetch_envelope<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let reply = self.get(&self.url(resource, None))?;
        decode_envelope(reply.status, &reply.body)
    }

    pub fn fetch_locations(&self) -> Result<Vec<Location>> {
        self.fetch_envelope(Resource::Locations)
    }

    /// Loads locations, then the team, and normalizes the directory as of
    /// `now`.
    pub fn fetch_team(&self, now: DateTime<Utc>) -> Result<Vec<TeamMember>> {
        let started = Instant::now();
        let locations = self.fetch_locations()?;
        let categories: Vec<TeamCategory> = self.fetch_envelope(Resource::Team)?;
        let members = normalize(categories, &locations, now);
        info!(
            resource = Resource::Team.path(),
            count = members.len(),
            locations = locations.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "team directory loaded"
        );
        Ok(members)
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// POSTs a new record. Only the status of the reply is inspected.
    pub fn create<B>(&self, resource: Resource, body: &B) -> Result<()>
    where
        B: Serialize + Validate,
    {
        body.validate()?;
        let url = self.url(resource, None);
        debug!(%url, "POST");
        self.execute(self.http.post(&url).json(body))?;
        Ok(())
    }

    /// PUTs the editable fields of an existing record.
    pub fn update<B>(&self, resource: Resource, id: RecordId, body: &B) -> Result<()>
    where
        B: Serialize + Validate,
    {
        body.validate()?;
        let url = self.url(resource, Some(id));
        debug!(%url, "PUT");
        self.execute(self.http.put(&url).json(body))?;
        Ok(())
    }

    /// Deletes a record remotely. Callers remove it locally only on `Ok`.
    pub fn delete(&self, resource: Resource, id: RecordId) -> Result<()> {
        let url = self.url(resource, Some(id));
        debug!(%url, "DELETE");
        self.execute(self.http.delete(&url))?;
        info!(resource = resource.path(), %id, "record deleted");
        Ok(())
    }

    /// Submits an application for a job.
    pub fn apply(&self, job_id: RecordId, application: &ApplicationDraft) -> Result<()> {
        application.validate()?;
        let url = format!("{}/apply", self.url(Resource::Jobs, Some(job_id)));
        debug!(%url, "POST");
        self.execute(self.http.post(&url).json(application))?;
        info!(job = %job_id, "application submitted");
        Ok(())
    }

    pub fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        credentials.validate()?;
        self.authenticate("login", credentials)
    }

    pub fn signup(&self, request: &SignupRequest) -> Result<LoginResponse> {
        request.validate()?;
        self.authenticate("signup", request)
    }

    fn authenticate<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<LoginResponse> {
        let url = format!("{}/{endpoint}", self.auth_api);
        debug!(%url, "POST");
        let reply = self.execute(self.http.post(&url).json(body))?;
        decode_one(&reply.body)
    }

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------

    fn get(&self, url: &str) -> Result<Reply> {
        self.retry.run(|attempt| {
            debug!(%url, attempt, "GET");
            self.execute(self.http.get(url))
        })
    }

    fn execute(&self, request: RequestBuilder) -> Result<Reply> {
        let response = request.send().map_err(|e| self.transport_error(&e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.transport_error(&e))?;
        debug!(status, bytes = body.len(), "response received");
        check_status(status, &body)?;
        Ok(Reply { status, body })
    }

    fn transport_error(&self, err: &reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
