//! Fire-and-forget facade with success/error callbacks.
//!
//! # Design
//! Each method builds its request synchronously, spawns one Tokio task to
//! run it, and returns the task's `JoinHandle` immediately. Callbacks are
//! `FnOnce`, so each fires at most once. Write calls take an error callback
//! and exactly one of the pair fires. Read calls take no error callback:
//! a failed read is logged and dropped.
//!
//! All methods must be called from within a Tokio runtime.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::Rulesets;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::Transport;

/// Callback-style wrapper around `Rulesets`.
#[derive(Debug)]
pub struct CallbackRulesets<T> {
    inner: Arc<Rulesets<T>>,
}

impl<T> Clone for CallbackRulesets<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport + 'static> CallbackRulesets<T> {
    pub fn new(rulesets: Rulesets<T>) -> Self {
        Self {
            inner: Arc::new(rulesets),
        }
    }

    pub fn list<R, F>(&self, callback: F) -> JoinHandle<()>
    where
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
    {
        let request = self.inner.client().build_list();
        self.spawn_read(request, callback)
    }

    pub fn list_definitions<R, F>(&self, callback: F) -> JoinHandle<()>
    where
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
    {
        let request = self.inner.client().build_list_definitions();
        self.spawn_read(request, callback)
    }

    /// Returns `Err` without sending anything when `input` fails to serialize.
    pub fn create<I, R, F, E>(&self, input: &I, callback: F, error: E) -> Result<JoinHandle<()>, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
        E: FnOnce(ApiError) + Send + 'static,
    {
        let request = self.inner.client().build_new(input)?;
        Ok(self.spawn_write(request, callback, error))
    }

    pub fn update<I, R, F, E>(&self, input: &I, callback: F, error: E) -> Result<JoinHandle<()>, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
        E: FnOnce(ApiError) + Send + 'static,
    {
        let request = self.inner.client().build_update(input)?;
        Ok(self.spawn_write(request, callback, error))
    }

    pub fn delete<I, R, F, E>(&self, input: &I, callback: F, error: E) -> Result<JoinHandle<()>, ApiError>
    where
        I: Serialize + ?Sized,
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
        E: FnOnce(ApiError) + Send + 'static,
    {
        let request = self.inner.client().build_delete(input)?;
        Ok(self.spawn_write(request, callback, error))
    }

    fn spawn_read<R, F>(&self, request: HttpRequest, callback: F) -> JoinHandle<()>
    where
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
    {
        let rulesets = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let path = request.path.clone();
            match rulesets.dispatch::<R>(request).await {
                Ok(value) => callback(value),
                Err(err) => warn!(%path, error = %err, "ruleset read failed; no error callback to notify"),
            }
        })
    }

    fn spawn_write<R, F, E>(&self, request: HttpRequest, callback: F, error: E) -> JoinHandle<()>
    where
        R: DeserializeOwned + Send + 'static,
        F: FnOnce(R) + Send + 'static,
        E: FnOnce(ApiError) + Send + 'static,
    {
        let rulesets = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match rulesets.dispatch::<R>(request).await {
                Ok(value) => callback(value),
                Err(err) => error(err),
            }
        })
    }
}
