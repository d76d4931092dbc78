//! GraphQL client for the collection server.
//!
//! This module provides:
//!
//! - `GraphQlTransport`: the seam query operations are written against
//! - `GraphQlClient`: HTTP implementation posting JSON queries with reqwest
//! - `request`: runs a query and decodes its `data` into a typed response
//!
//! Requests are never retried. Both transport failures and GraphQL `errors`
//! entries come back as a `QueryError`.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

/// User agent for API requests
const USER_AGENT: &str = concat!("rombrowser/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while running a query
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Response contained no data")]
    MissingData,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can execute a GraphQL query document
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Run `query` and return the `data` member of the response
    async fn execute(&self, query: &str) -> Result<Value, QueryError>;
}

/// Run `query` and decode its data into `T`
pub async fn request<T, C>(client: &C, query: &str) -> Result<T, QueryError>
where
    T: DeserializeOwned,
    C: GraphQlTransport + ?Sized,
{
    let data = client.execute(query).await?;
    Ok(serde_json::from_value(data)?)
}

/// One entry of a response's `errors` list
#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// A response with any errors is a failure even if partial data came back
    fn into_data(self) -> Result<Value, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(QueryError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

/// HTTP GraphQL client
#[derive(Clone)]
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: Url) -> Result<Self, QueryError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlTransport for GraphQlClient {
    async fn execute(&self, query: &str) -> Result<Value, QueryError> {
        tracing::debug!("POST {} {}", self.endpoint, query.trim());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "query": query }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        let envelope: GraphQlResponse = response.json().await?;
        envelope.into_data()
    }
}

/// In-memory transport for tests
#[cfg(test)]
pub mod testing {
    use super::*;

    /// Serves canned `data` for the first key contained in the query and
    /// fails every other query
    pub struct FakeServer {
        responses: Vec<(&'static str, Value)>,
    }

    impl FakeServer {
        pub fn new(responses: Vec<(&'static str, Value)>) -> Self {
            Self { responses }
        }
    }

    #[async_trait]
    impl GraphQlTransport for FakeServer {
        async fn execute(&self, query: &str) -> Result<Value, QueryError> {
            self.responses
                .iter()
                .find(|(key, _)| query.contains(key))
                .map(|(_, data)| data.clone())
                .ok_or_else(|| QueryError::GraphQl(vec![format!("unexpected query: {}", query)]))
        }
    }
}
