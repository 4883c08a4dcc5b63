//! REST client for the Content Pack Service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call reports through [`ApiError`]; non-success statuses, transport
//! failures, and undecodable bodies are all distinguished so screens can
//! surface a uniform failure banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::error::ApiError;
use crate::state::queue::QueueFilter;
use crate::state::session::Session;

use super::types::{ContentPack, TokenResponse};

/// Request-building collaborator for the Content Pack Service.
///
/// Holds the base URL from the startup [`ApiConfig`]; the session travels
/// into each authenticated call by reference.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn list_packs_path(filter: &QueueFilter) -> String {
    let query = filter.to_query();
    if query.is_empty() {
        "/content-packs".to_owned()
    } else {
        format!("/content-packs?{query}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn pack_path(pack_id: i64) -> String {
    format!("/content-packs/{pack_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn approve_path(pack_id: i64) -> String {
    format!("/content-packs/{pack_id}/approve")
}

#[cfg(any(test, feature = "hydrate"))]
fn reject_path(pack_id: i64) -> String {
    format!("/content-packs/{pack_id}/reject")
}

#[cfg(any(test, feature = "hydrate"))]
fn export_path(pack_id: i64) -> String {
    format!("/content-packs/{pack_id}/export")
}

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/auth/login";

/// Attach the bearer token when the session holds one. The service also
/// accepts unauthenticated review traffic in its local-testing
/// configuration, so an anonymous session sends the request as-is.
#[cfg(feature = "hydrate")]
fn authed(
    request: gloo_net::http::RequestBuilder,
    session: &Session,
) -> gloo_net::http::RequestBuilder {
    match session.token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

impl ApiClient {
    /// Client bound to the configured service base URL.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch the pack list via `GET /content-packs`, optionally filtered.
    pub async fn list_packs(
        &self,
        session: &Session,
        filter: &QueueFilter,
    ) -> Result<Vec<ContentPack>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&list_packs_path(filter));
            let response = authed(gloo_net::http::Request::get(&url), session)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            response
                .json::<Vec<ContentPack>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, filter);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch one pack's full record via `GET /content-packs/{id}`.
    pub async fn fetch_pack(
        &self,
        session: &Session,
        pack_id: i64,
    ) -> Result<ContentPack, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&pack_path(pack_id));
            let response = authed(gloo_net::http::Request::get(&url), session)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            response
                .json::<ContentPack>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pack_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Partially update a pack via `PATCH /content-packs/{id}`. Only the
    /// reviewer notes travel; the caller re-fetches afterwards rather than
    /// trusting the mutation response.
    pub async fn save_reviewer_notes(
        &self,
        session: &Session,
        pack_id: i64,
        notes: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&pack_path(pack_id));
            let payload = serde_json::json!({ "reviewer_notes": notes });
            let response = authed(gloo_net::http::Request::patch(&url), session)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pack_id, notes);
            Err(ApiError::Unavailable)
        }
    }

    /// Request approval via `POST /content-packs/{id}/approve`. The approve
    /// endpoint takes no body; its asymmetry with reject is part of the
    /// service contract.
    pub async fn approve_pack(&self, session: &Session, pack_id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&approve_path(pack_id));
            let response = authed(gloo_net::http::Request::post(&url), session)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pack_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Request rejection via `POST /content-packs/{id}/reject`, carrying the
    /// reviewer's reason.
    pub async fn reject_pack(
        &self,
        session: &Session,
        pack_id: i64,
        notes: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&reject_path(pack_id));
            let payload = serde_json::json!({ "reviewer_notes": notes });
            let response = authed(gloo_net::http::Request::post(&url), session)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pack_id, notes);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the handoff document via `GET /content-packs/{id}/export`.
    ///
    /// The body stays an opaque JSON value: the downloaded artifact must
    /// mirror the service response exactly, so no client-side shape is
    /// imposed on it.
    pub async fn export_handoff(
        &self,
        session: &Session,
        pack_id: i64,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&export_path(pack_id));
            let response = authed(gloo_net::http::Request::get(&url), session)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pack_id);
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange credentials for an access token via `POST /auth/login`.
    /// The one unauthenticated call in the client.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(LOGIN_PATH);
            let payload = serde_json::json!({ "email": email, "password": password });
            let response = gloo_net::http::Request::post(&url)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                });
            }
            response
                .json::<TokenResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }
}
