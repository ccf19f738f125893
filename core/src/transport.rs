//! The I/O seam between the request builder and the network.
//!
//! # Design
//! `Transport` is the only place that performs I/O. It is injected into
//! `Rulesets` instead of being a global, so tests substitute a recording
//! mock. A transport reports non-2xx statuses as ordinary responses; only
//! failures to obtain a response at all are errors.

use std::future::Future;
use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP exchange.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        (**self).send(request)
    }
}

/// Default transport backed by a blocking `ureq::Agent`.
///
/// Each request runs on Tokio's blocking pool, so callers stay non-blocking.
/// Status codes are returned as data rather than `Err`, leaving status
/// interpretation to `RulesetClient`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => {
            let mut builder = agent.get(&req.path);
            for (key, value) in &req.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            builder.call()
        }
        (HttpMethod::Post, body) => {
            let mut builder = agent.post(&req.path);
            for (key, value) in &req.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            match body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(key, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (key.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}
