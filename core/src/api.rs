//! Async facade over `RulesetClient` and a `Transport`.
//!
//! Every method performs exactly one request and resolves exactly once with
//! a `Result`. Nothing is shared between calls, so concurrent calls may
//! complete in any order.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::client::RulesetClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::Transport;

/// Ruleset operations bound to a transport.
#[derive(Debug, Clone)]
pub struct Rulesets<T> {
    client: RulesetClient,
    transport: T,
}

impl<T: Transport> Rulesets<T> {
    pub fn with_transport(client: RulesetClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self::with_transport(RulesetClient::from_config(config), transport)
    }

    pub fn client(&self) -> &RulesetClient {
        &self.client
    }

    /// `GET /JSON/Ruleset/List`.
    pub async fn list<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.dispatch(self.client.build_list()).await
    }

    /// `GET /JSON/Ruleset/ListDefinitions`.
    pub async fn list_definitions<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        self.dispatch(self.client.build_list_definitions()).await
    }

    /// `POST /JSON/Ruleset/New`. Serialization errors return before the
    /// transport is used.
    pub async fn create<I, R>(&self, input: &I) -> Result<R, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.build_new(input)?;
        self.dispatch(request).await
    }

    /// `POST /JSON/Ruleset/Update`.
    pub async fn update<I, R>(&self, input: &I) -> Result<R, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.build_update(input)?;
        self.dispatch(request).await
    }

    /// `POST /JSON/Ruleset/Delete`.
    pub async fn delete<I, R>(&self, input: &I) -> Result<R, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.build_delete(input)?;
        self.dispatch(request).await
    }

    /// Send a prebuilt request once and decode its response.
    pub async fn dispatch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "dispatching ruleset request");
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "received ruleset response");
        self.client.parse_response(response)
    }
}
