//! Stateless HTTP request builder and response parser for the ruleset API.
//!
//! # Design
//! `RulesetClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Rulesets are opaque: writes accept anything `Serialize`
//! and reads decode into whatever `DeserializeOwned` type the caller picks.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const JSON_MEDIA_TYPE: &str = "application/json";

/// The five remote ruleset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    ListDefinitions,
    New,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::ListDefinitions,
        Operation::New,
        Operation::Update,
        Operation::Delete,
    ];

    /// Endpoint path, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::List => "/JSON/Ruleset/List",
            Operation::ListDefinitions => "/JSON/Ruleset/ListDefinitions",
            Operation::New => "/JSON/Ruleset/New",
            Operation::Update => "/JSON/Ruleset/Update",
            Operation::Delete => "/JSON/Ruleset/Delete",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::List | Operation::ListDefinitions => HttpMethod::Get,
            Operation::New | Operation::Update | Operation::Delete => HttpMethod::Post,
        }
    }
}

/// Synchronous, stateless client for the ruleset API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. A `Transport` (or any other caller) executes the
/// HTTP round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct RulesetClient {
    base_url: String,
}

impl RulesetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self) -> HttpRequest {
        self.build_read(Operation::List)
    }

    pub fn build_list_definitions(&self) -> HttpRequest {
        self.build_read(Operation::ListDefinitions)
    }

    pub fn build_new<T: Serialize + ?Sized>(&self, input: &T) -> Result<HttpRequest, ApiError> {
        self.build_write(Operation::New, input)
    }

    pub fn build_update<T: Serialize + ?Sized>(&self, input: &T) -> Result<HttpRequest, ApiError> {
        self.build_write(Operation::Update, input)
    }

    pub fn build_delete<T: Serialize + ?Sized>(&self, input: &T) -> Result<HttpRequest, ApiError> {
        self.build_write(Operation::Delete, input)
    }

    pub fn parse_list<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        self.parse_response(response)
    }

    pub fn parse_list_definitions<R: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<R, ApiError> {
        self.parse_response(response)
    }

    pub fn parse_new<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        self.parse_response(response)
    }

    pub fn parse_update<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        self.parse_response(response)
    }

    pub fn parse_delete<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        self.parse_response(response)
    }

    /// Decode a response for any operation.
    ///
    /// Non-2xx statuses become `ApiError::HttpError` with the raw body. A
    /// `204 No Content` decodes as JSON `null`; every other 2xx body must be
    /// valid JSON for `R`.
    pub fn parse_response<R: DeserializeOwned>(&self, response: HttpResponse) -> Result<R, ApiError> {
        check_status(&response)?;
        let body = if response.status == 204 {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn url(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    fn build_read(&self, operation: Operation) -> HttpRequest {
        HttpRequest {
            method: operation.method(),
            path: self.url(operation),
            headers: vec![("accept".to_string(), JSON_MEDIA_TYPE.to_string())],
            body: None,
        }
    }

    fn build_write<T: Serialize + ?Sized>(
        &self,
        operation: Operation,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: operation.method(),
            path: self.url(operation),
            headers: vec![
                ("accept".to_string(), JSON_MEDIA_TYPE.to_string()),
                ("content-type".to_string(), JSON_MEDIA_TYPE.to_string()),
            ],
            body: Some(body),
        })
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
