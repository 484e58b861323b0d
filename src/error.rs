use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for Kanka API operations
#[derive(Debug, Error)]
pub enum KankaError {
    /// A negative ID was supplied for a path segment
    #[error("invalid ID ({id}): IDs must be non-negative")]
    InvalidId { id: i64 },

    /// An argument was rejected before any request was built
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload failed validation before serialization
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status code
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The response envelope carried no `data` field
    #[error("response contained no data")]
    MissingData,

    /// Failure reported by a custom transport
    #[error("transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An error with the operation and IDs it happened in
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<KankaError>,
    },
}

impl KankaError {
    /// Wrap this error with a description of what was being attempted
    pub fn context(self, context: impl Into<String>) -> Self {
        KankaError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every context layer removed
    pub fn root(&self) -> &KankaError {
        match self {
            KankaError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Get the HTTP status code if the server rejected the request
    pub fn status_code(&self) -> Option<u16> {
        match self.root() {
            KankaError::Server(err) => Some(err.code()),
            KankaError::Reqwest(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the failure may go away when the request is repeated
    pub fn is_temporary(&self) -> bool {
        matches!(self.root(), KankaError::Server(err) if err.is_temporary())
    }
}

/// Result type for Kanka operations
pub type Result<T> = std::result::Result<T, KankaError>;

/// Adds context to the error side of a [`Result`]
pub trait ResultExt<T> {
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.context(f()))
    }
}

/// A non-success HTTP status returned by the Kanka API.
///
/// Codes 421 (misdirected request) and 429 (too many requests) are marked
/// temporary. The client never retries on its own; callers can build a retry
/// policy on top of [`ServerError::is_temporary`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("server error {code}: {status}")]
pub struct ServerError {
    code: u16,
    status: String,
    temporary: bool,
}

impl ServerError {
    /// Classify the given status code
    pub fn new(code: u16) -> Self {
        let status = StatusCode::from_u16(code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unknown status")
            .to_string();

        ServerError {
            code,
            status,
            temporary: matches!(code, 421 | 429),
        }
    }

    /// The HTTP status code
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The canonical status text, e.g. "Unauthorized"
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }
}

/// Why a payload was rejected at the serialization boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{field}` is blank")]
    Missing { field: &'static str },

    #[error("field `{field}` is {value}, outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("field `{field}` is {len} characters long, the limit is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}
