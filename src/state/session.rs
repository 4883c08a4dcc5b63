//! Reviewer session holding the Content Pack Service access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is built once at startup from localStorage, provided through
//! context, and passed by reference into every authenticated API call.
//! Nothing reads the token from ambient global state mid-flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// localStorage key for the persisted access token.
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "sendy_review_access_token";

/// The current reviewer session; anonymous until a login succeeds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    /// Session restored from localStorage, or an anonymous one when the
    /// store is empty or no browser exists.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
            Self {
                access_token: stored.filter(|token| !token.is_empty()),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Session carrying a freshly issued access token.
    pub fn authenticated(access_token: String) -> Self {
        Self {
            access_token: Some(access_token),
        }
    }

    /// The access token, if one was issued.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Whether a token is held. The queue and detail screens do not gate on
    /// this; the service currently tolerates unauthenticated review traffic
    /// in the local-testing configuration.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Persist the session so later visits reuse the token.
    pub fn persist(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            match &self.access_token {
                Some(token) => {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
                None => {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}
