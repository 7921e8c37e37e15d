mod web_client;

pub use web_client::WebClient;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/lugares";

#[derive(Debug)]
pub enum ApiError {
    Std(Box<dyn std::error::Error + Send + Sync>),
    Message(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for ApiError {
    fn from(value: E) -> Self {
        ApiError::Std(Box::new(value))
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Std(err) => write!(f, "{err}"),
            ApiError::Message(msg) => write!(f, "{msg}"),
        }
    }
}

/// Status and raw body of an endpoint response. The body is only decoded
/// once the caller has looked at the status.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Where the collection lives, for diagnostics.
    fn collection_url(&self) -> String;

    async fn get_collection(&self) -> Result<ApiResponse, ApiError>;

    async fn get_place(&self, id: &str) -> Result<ApiResponse, ApiError>;
}
