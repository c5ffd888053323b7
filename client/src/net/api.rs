//! REST client for the generation-request service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ServiceError::Unavailable`] since
//! the service is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the controller logs the
//! failure and surfaces its message next to the request list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GenerationRequest, GenerationSpec};
use crate::util::env;

/// Failure reaching or talking to the generation service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("service responded {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Lifecycle operations on an existing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAction {
    Cancel,
    Retry,
    Delete,
    Publish,
    Unpublish,
}

impl RequestAction {
    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Retry => "Retry",
            Self::Delete => "Delete",
            Self::Publish => "Publish",
            Self::Unpublish => "Unpublish",
        }
    }

    /// Material icon name shown on the button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Retry => "replay",
            Self::Delete => "delete",
            Self::Publish => "public",
            Self::Unpublish => "public_off",
        }
    }

    fn verb(self) -> Option<&'static str> {
        match self {
            Self::Cancel => Some("cancel"),
            Self::Retry => Some("retry"),
            Self::Publish => Some("publish"),
            Self::Unpublish => Some("unpublish"),
            Self::Delete => None,
        }
    }
}

fn list_endpoint() -> String {
    env::api_url("generation-request/")
}

fn request_endpoint(id: i64) -> String {
    env::api_url(&format!("generation-request/{id}"))
}

/// `DELETE` targets the request itself; every other action `POST`s to a
/// verb sub-resource.
fn action_endpoint(action: RequestAction, id: i64) -> String {
    match action.verb() {
        Some(verb) => format!("{}/{verb}", request_endpoint(id)),
        None => request_endpoint(id),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ServiceError> {
    let resp = request.send().await.map_err(|e| ServiceError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ServiceError::Status(resp.status()));
    }
    Ok(resp)
}

/// Fetch all requests visible to the caller, newest first.
///
/// # Errors
///
/// Returns a [`ServiceError`] if the call fails or the body is not a list of
/// requests.
pub async fn list_requests(token: Option<&str>) -> Result<Vec<GenerationRequest>, ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorize(gloo_net::http::Request::get(&list_endpoint()), token)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let resp = send(request).await?;
        resp.json::<Vec<GenerationRequest>>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, list_endpoint());
        Err(ServiceError::Unavailable)
    }
}

/// Submit a new generation job.
///
/// # Errors
///
/// Returns a [`ServiceError`] if the call fails or the created request cannot
/// be decoded.
pub async fn create_request(spec: &GenerationSpec, token: Option<&str>) -> Result<GenerationRequest, ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CreateRequestBody { spec: spec.clone() };
        let request = authorize(gloo_net::http::Request::post(&list_endpoint()), token)
            .json(&body)
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        let resp = send(request).await?;
        resp.json::<GenerationRequest>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (spec, token);
        Err(ServiceError::Unavailable)
    }
}

/// Apply a lifecycle action to request `id`. The response body is ignored.
///
/// # Errors
///
/// Returns a [`ServiceError`] if the call fails.
pub async fn perform(action: RequestAction, id: i64, token: Option<&str>) -> Result<(), ServiceError> {
    #[cfg(feature = "hydrate")]
    {
        let url = action_endpoint(action, id);
        let builder = match action {
            RequestAction::Delete => gloo_net::http::Request::delete(&url),
            _ => gloo_net::http::Request::post(&url),
        };
        let request = authorize(builder, token)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        send(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (action_endpoint(action, id), token);
        Err(ServiceError::Unavailable)
    }
}
