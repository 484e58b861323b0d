use crate::client::{create_rest_client, Config};
use crate::endpoint::Endpoint;
use crate::error::{KankaError, Result, ServerError};
use crate::token::Token;
use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

/// An HTTP request ready to be executed by a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Value of the first header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw outcome of an HTTP round trip
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes HTTP requests synchronously.
///
/// Implementations must be safe to share between threads; the client holds
/// exactly one transport for its whole lifetime.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the timeouts from the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(ReqwestTransport {
            client: create_rest_client(config)?,
        })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        let http_response = builder.send()?;
        let status = http_response.status().as_u16();
        let body = http_response.bytes()?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Request dispatcher shared by every resource service
pub struct RestContext {
    transport: Box<dyn Transport>,
    config: Config,
    token: Token,
}

impl RestContext {
    /// Create a context that talks to the API through the given transport
    pub fn new(token: Token, config: Config, transport: Box<dyn Transport>) -> Self {
        RestContext {
            transport,
            config,
            token,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an authenticated request for `base_url + path`
    pub fn request(&self, method: Method, end: &Endpoint) -> Result<HttpRequest> {
        if self.token.is_empty() {
            return Err(KankaError::InvalidArgument("access token is empty".to_string()));
        }

        let url = Url::parse(&format!("{}{}", self.config.base_url(), end))?;

        Ok(HttpRequest {
            method,
            url,
            headers: vec![
                ("Authorization".to_string(), self.token.bearer()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: None,
        })
    }

    /// Execute the request and decode the full response body as JSON
    pub fn send<T>(&self, request: HttpRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(&request)?;
        serde_json::from_slice(&response.body).map_err(KankaError::from)
    }

    pub fn get<T>(&self, end: &Endpoint) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, end)?;
        self.send(request)
    }

    pub fn post<T>(&self, end: &Endpoint, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = with_json_body(self.request(Method::POST, end)?, body);
        self.send(request)
    }

    pub fn put<T>(&self, end: &Endpoint, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = with_json_body(self.request(Method::PUT, end)?, body);
        self.send(request)
    }

    /// Issue a DELETE; the response body is not parsed
    pub fn delete(&self, end: &Endpoint) -> Result<()> {
        let request = self.request(Method::DELETE, end)?;
        self.execute(&request)?;
        Ok(())
    }

    /// Run the round trip and reject non-success statuses
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let start = Instant::now();
        let response = self.transport.execute(request)?;

        debug!(
            method = %request.method,
            path = request.url.path(),
            status = response.status,
            elapsed = ?start.elapsed(),
            "kanka request"
        );

        if !response.is_success() {
            warn!(
                method = %request.method,
                path = request.url.path(),
                status = response.status,
                "kanka request rejected"
            );
            return Err(ServerError::new(response.status).into());
        }

        Ok(response)
    }
}

impl fmt::Debug for RestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestContext")
            .field("config", &self.config)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

fn with_json_body(mut request: HttpRequest, body: Vec<u8>) -> HttpRequest {
    request
        .headers
        .push(("Content-Type".to_string(), "application/json".to_string()));
    request.body = Some(body);
    request
}
