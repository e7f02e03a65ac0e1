use crate::Result;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {0} failed with status {1}")]
    Status(String, u16),

    #[error("Invalid authorization token: {0}")]
    InvalidToken(String),

    #[error("Could not read {0:?}: {1}")]
    File(PathBuf, String),
}

/// Backend collections the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Transactions,
    Clients,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        return match self {
            Self::Transactions => "transactions",
            Self::Clients => "clients",
        };
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.path());
    }
}

/// Where a view gets its raw JSON from
pub trait RecordSource {
    fn fetch(&self, resource: Resource) -> Result<Value>;
}

/// Reads `GET {base_url}/{resource}` from the HorebPay API
pub struct HttpSource {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl HttpSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://prod.horebpay.com/horeb/api";

    pub fn new(base_url: String, token: Option<String>) -> Self {
        return Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        };
    }

    pub fn url(&self, resource: Resource) -> String {
        return format!("{}/{}", self.base_url, resource.path());
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| FetchError::InvalidToken(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        return Ok(headers);
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self, resource: Resource) -> Result<Value> {
        let url = self.url(resource);
        log::debug!("GET {url}");

        let response = self.http_client.get(&url).headers(self.headers()?).send()?;

        let status = response.status();
        if !status.is_success() {
            Err(FetchError::Status(url, status.as_u16()))?
        }

        let body: Value = response.json()?;

        return Ok(body);
    }
}

/// Serves a JSON document saved on disk, whatever resource is asked for
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        return Self { path };
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, resource: Resource) -> Result<Value> {
        log::debug!("Reading {resource} from {:?}", self.path);

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| FetchError::File(self.path.clone(), e.to_string()))?;

        let body: Value = serde_json::from_str(&contents)?;

        return Ok(body);
    }
}
