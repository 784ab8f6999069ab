use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

mod event;
mod ngo;

pub use event::{EventInput, EventService};
pub use ngo::{NgoInput, NgoService};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The operations a resource must support to be exposed over HTTP
///
/// Lookups that find nothing resolve to `None` rather than an error.
#[async_trait]
pub trait Service: Send + Sync + 'static {
    /// The payload accepted when creating or updating a resource
    type Input: DeserializeOwned + Send + 'static;
    /// The representation returned to clients
    type Resource: Serialize + Send + 'static;

    /// Get every resource
    async fn all(&self) -> Result<Vec<Self::Resource>>;

    /// Get a resource by it's ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Self::Resource>>;

    /// Get a resource by it's slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Self::Resource>>;

    /// Create a new resource
    async fn create(&self, input: Self::Input) -> Result<Self::Resource>;

    /// Replace the details of a resource
    async fn update(&self, id: &str, input: Self::Input) -> Result<Option<Self::Resource>>;

    /// Delete a resource, returning it if it existed
    async fn delete(&self, id: &str) -> Result<Option<Self::Resource>>;
}

/// Errors that can occur within a service
#[derive(Debug)]
pub enum Error {
    /// The ID is not in a recognized format
    InvalidId(String),
    /// Another resource already uses the slug
    SlugTaken(String),
    Database(database::Error),
    /// A failure from a backend other than the database
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Whether the error was caused by the contents of the request
    pub fn is_caused_by_request(&self) -> bool {
        matches!(self, Self::InvalidId(_) | Self::SlugTaken(_))
    }

    /// Classify a database error for the given slug
    pub(crate) fn from_database(error: database::Error, slug: &str) -> Self {
        if error.is_unique_violation() {
            Self::SlugTaken(slug.to_owned())
        } else {
            Self::Database(error)
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "invalid id {id:?}"),
            Self::SlugTaken(slug) => write!(f, "slug {slug:?} is already in use"),
            Self::Database(_) => write!(f, "unexpected database error"),
            Self::Other(error) => write!(f, "unexpected service error: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            Self::Other(e) => Some(&**e),
            Self::InvalidId(_) | Self::SlugTaken(_) => None,
        }
    }
}

impl From<database::Error> for Error {
    fn from(error: database::Error) -> Self {
        Self::Database(error)
    }
}

/// Parse an ID provided by a client
pub(crate) fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::InvalidId(id.to_owned()))
}
