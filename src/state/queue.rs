//! Review-queue list state and filter controls.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use crate::net::types::{ContentPack, ContentPackStatus};

/// Status choices offered by the queue filter dropdown, in display order.
pub const STATUS_FILTER_OPTIONS: [ContentPackStatus; 3] = [
    ContentPackStatus::DraftReady,
    ContentPackStatus::InReview,
    ContentPackStatus::Approved,
];

/// Filter controls applied to the list request.
///
/// `breaking_only = false` means "no breaking constraint", never a
/// `breaking=false` query parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueFilter {
    pub status: Option<ContentPackStatus>,
    pub breaking_only: bool,
}

impl QueueFilter {
    /// Query string for `GET /content-packs`, without the leading `?`.
    /// Empty when no filter is active.
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(status) = self.status {
            parts.push(format!("status={}", status.as_str()));
        }
        if self.breaking_only {
            parts.push("breaking=true".to_owned());
        }
        parts.join("&")
    }
}

/// Parse the filter dropdown's selected value; the empty option means all.
pub fn parse_status_filter(value: &str) -> Option<ContentPackStatus> {
    ContentPackStatus::parse(value)
}

/// Queue screen state: the fetched list plus request progress.
#[derive(Clone, Debug, Default)]
pub struct QueueState {
    pub items: Vec<ContentPack>,
    pub loading: bool,
    pub error: Option<String>,
}
