use crate::{entity::Entity, search::EntitySearch, ClientError, ErrorResponse, Result, SearchPage};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

/// Base URL of the public MusicBrainz web service.
pub const MUSICBRAINZ_WS2: &str = "https://musicbrainz.org/ws/2";

/// Largest page the web service hands out.
pub const MAX_LIMIT: u8 = 100;

static DEFAULT_USER_AGENT: &str = concat!("brainz-client/", env!("CARGO_PKG_VERSION"));

/// Page selection for a search request. Unset values use the service defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: Option<u8>,
    pub offset: Option<u32>,
}

impl Paging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    fn validate(&self) -> Result<()> {
        match self.limit {
            Some(limit) if !(1..=MAX_LIMIT).contains(&limit) => Err(ClientError::InvalidPaging(
                format!("limit must be within 1..={}, got {}", MAX_LIMIT, limit),
            )),
            _ => Ok(()),
        }
    }
}

/// Blocking client for the search endpoints of the web service.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    user_agent: String,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn musicbrainz() -> Self {
        Self::new(MUSICBRAINZ_WS2)
    }

    /// The service rejects anonymous clients; identify the application and a contact,
    /// e.g. `my-app/1.0 (me@example.org)`.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request URL for searching `entity` with an already rendered query.
    pub fn search_url(&self, entity: Entity, query: &str, paging: Paging) -> Result<Url> {
        paging.validate()?;
        let mut url = Url::parse(&format!("{}/{}", self.base_url, entity))
            .map_err(|err| ClientError::InvalidUrl(format!("{}: {}", self.base_url, err)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            if let Some(limit) = paging.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = paging.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
            pairs.append_pair("fmt", "json");
        }
        Ok(url)
    }

    // Search endpoint
    pub fn search(&self, entity: Entity, query: &str, paging: Paging) -> Result<SearchPage> {
        let url = self.search_url(entity, query, paging)?;
        brainz_log!(debug, "Client", entity, "GET {}", url);
        let response = self
            .http
            .get(url)
            .headers(self.headers()?)
            .send()
            .map_err(ClientError::Reqwest)?;
        let body = self.handle_response(entity, response)?;
        SearchPage::from_json(entity, &body)
    }

    /// Render `search` and send it. An empty search is refused before any request
    /// is made, since the service answers it with an error.
    pub fn search_with<S: EntitySearch>(&self, search: &S, paging: Paging) -> Result<SearchPage> {
        let query = search.build();
        if query.is_empty() {
            return Err(ClientError::EmptyQuery);
        }
        self.search(S::ENTITY, &query, paging)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|err| ClientError::Http(format!("invalid User-Agent: {}", err)))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn handle_response(
        &self,
        entity: Entity,
        response: reqwest::blocking::Response,
    ) -> Result<String> {
        let status = response.status();
        let body = response.text().map_err(ClientError::Reqwest)?;
        if status.is_success() {
            return Ok(body);
        }

        brainz_log!(warn, "Client", entity, "HTTP {}: {}", status.as_u16(), body);
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error_response) => Err(ClientError::Api(error_response.error)),
            Err(_) => Err(ClientError::Http(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            ))),
        }
    }
}
