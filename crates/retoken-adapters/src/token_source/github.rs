//! GitHub deployment-environment variables as tokens.
//!
//! Uses the REST API with a blocking client:
//!
//! 1. `GET /repos/{owner}/{repo}` to look up the numeric repository id
//! 2. `GET /repositories/{id}/environments/{name}/variables?per_page=30&page=N`
//!    until a short page, or until `total_count` variables were read
//!
//! Every variable `{ name, value }` becomes the token `{ key: name, value }`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use retoken_core::{
    application::{ApplicationError, ports::TokenSource},
    domain::{Token, TokenSet},
    error::{RetokenError, RetokenResult},
};

/// Public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned for every request.
pub const API_VERSION: &str = "2022-11-28";

/// Variables requested per page.
pub const PER_PAGE: usize = 30;

/// Default timeout for GitHub requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("retoken/", env!("CARGO_PKG_VERSION"));

/// `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepository {
    pub owner: String,
    pub name: String,
}

impl FromStr for GitHubRepository {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ApplicationError::ValidationFailed(format!(
                "repository must look like 'owner/repo', got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for GitHubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct VariablesPage {
    total_count: usize,
    variables: Vec<Variable>,
}

#[derive(Debug, Deserialize)]
struct Variable {
    name: String,
    value: String,
}

/// Reads the variables of one deployment environment.
#[derive(Clone)]
pub struct GitHubEnvironmentSource {
    client: Client,
    api_url: Url,
    repository: GitHubRepository,
    environment: String,
    token: String,
}

impl GitHubEnvironmentSource {
    /// Source against the public API.
    pub fn new(
        repository: GitHubRepository,
        environment: impl Into<String>,
        token: impl Into<String>,
    ) -> RetokenResult<Self> {
        Self::with_api_url(DEFAULT_API_URL, repository, environment, token)
    }

    /// Source against another API root (GitHub Enterprise, tests).
    pub fn with_api_url(
        api_url: &str,
        repository: GitHubRepository,
        environment: impl Into<String>,
        token: impl Into<String>,
    ) -> RetokenResult<Self> {
        let environment = environment.into();
        let source_name = display_name(&environment);

        let api_url = Url::parse(api_url).map_err(|e| ApplicationError::TokenSourceFailed {
            source_name: source_name.clone(),
            reason: format!("invalid API URL '{api_url}': {e}"),
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ApplicationError::TokenSourceFailed {
                source_name,
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_url,
            repository,
            environment,
            token: token.into(),
        })
    }

    fn failure(&self, reason: impl Into<String>) -> RetokenError {
        ApplicationError::TokenSourceFailed {
            source_name: self.name(),
            reason: reason.into(),
        }
        .into()
    }

    fn endpoint(&self, segments: &[&str]) -> RetokenResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| self.failure(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> RetokenResult<T> {
        debug!(%url, "GitHub request");
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .map_err(|e| self.failure(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure(format!("GET {url} returned {status}")));
        }

        response
            .json::<T>()
            .map_err(|e| self.failure(format!("unexpected response from {url}: {e}")))
    }

    fn repository_id(&self) -> RetokenResult<u64> {
        let url = self.endpoint(&["repos", &self.repository.owner, &self.repository.name])?;
        let repo: RepositoryResponse = self.get_json(url)?;
        Ok(repo.id)
    }

    fn variables_page(&self, repository_id: u64, page: usize) -> RetokenResult<VariablesPage> {
        let id = repository_id.to_string();
        let mut url = self.endpoint(&[
            "repositories",
            &id,
            "environments",
            &self.environment,
            "variables",
        ])?;
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());
        self.get_json(url)
    }
}

impl fmt::Debug for GitHubEnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubEnvironmentSource")
            .field("api_url", &self.api_url.as_str())
            .field("repository", &self.repository)
            .field("environment", &self.environment)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn display_name(environment: &str) -> String {
    format!("GitHub environment '{environment}'")
}

impl TokenSource for GitHubEnvironmentSource {
    fn name(&self) -> String {
        display_name(&self.environment)
    }

    #[instrument(skip_all, fields(repository = %self.repository, environment = %self.environment))]
    fn load(&self) -> RetokenResult<TokenSet> {
        let repository_id = self.repository_id()?;
        debug!(repository_id, "Resolved repository id");

        let mut tokens = TokenSet::new();
        let mut fetched = 0;
        let mut page = 1;

        loop {
            let batch = self.variables_page(repository_id, page)?;
            let count = batch.variables.len();
            fetched += count;
            tokens.extend(
                batch
                    .variables
                    .into_iter()
                    .map(|v| Token::new(v.name, v.value)),
            );

            if count < PER_PAGE || fetched >= batch.total_count {
                break;
            }
            page += 1;
        }

        debug!(pages = page, count = tokens.len(), "Read environment variables");
        Ok(tokens)
    }
}
