//! API client core for the scoreboard ruleset endpoints.
//!
//! # Overview
//! Five remote operations on the ruleset resource: `List`,
//! `ListDefinitions`, `New`, `Update` and `Delete`. Reads are `GET`
//! requests, writes `POST` a JSON body. Rulesets are opaque to this crate;
//! callers choose the Rust types that go in and come out.
//!
//! # Design
//! - `RulesetClient` is stateless and does no I/O: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the injected I/O seam; `UreqTransport` is the default.
//! - `Rulesets` joins the two into async methods returning `Result`.
//! - `CallbackRulesets` keeps the fire-and-forget success/error callback
//!   style on top of `Rulesets`.

pub mod api;
pub mod callbacks;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use api::Rulesets;
pub use callbacks::CallbackRulesets;
pub use client::{Operation, RulesetClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
