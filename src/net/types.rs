//! Wire DTOs for the Content Pack Service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the service's serialized pack shape field-for-field so
//! payloads are parsed into typed records at the boundary. A payload that
//! does not match decodes to a typed error instead of letting undefined
//! values leak into rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a content pack.
///
/// The review screens only ever request transitions into `Approved` and
/// `Rejected`, but packs arrive in any lifecycle state, so the client
/// decodes the full set rather than failing on an unfamiliar one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentPackStatus {
    New,
    Enriched,
    DraftReady,
    InReview,
    Approved,
    Rejected,
    Archived,
    AssetsPending,
    Scheduled,
    Posted,
}

impl ContentPackStatus {
    /// Wire spelling of the status, as used in query strings and rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Enriched => "ENRICHED",
            Self::DraftReady => "DRAFT_READY",
            Self::InReview => "IN_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Archived => "ARCHIVED",
            Self::AssetsPending => "ASSETS_PENDING",
            Self::Scheduled => "SCHEDULED",
            Self::Posted => "POSTED",
        }
    }

    /// Parse the wire spelling back into a status, if recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEW" => Some(Self::New),
            "ENRICHED" => Some(Self::Enriched),
            "DRAFT_READY" => Some(Self::DraftReady),
            "IN_REVIEW" => Some(Self::InReview),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "ARCHIVED" => Some(Self::Archived),
            "ASSETS_PENDING" => Some(Self::AssetsPending),
            "SCHEDULED" => Some(Self::Scheduled),
            "POSTED" => Some(Self::Posted),
            _ => None,
        }
    }
}

/// A reviewable content pack as serialized by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    /// Unique pack identifier, immutable.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Identifier of the ingested source item this pack was built from.
    pub source_id: String,
    /// Headline title shown in the queue and detail views.
    pub title: String,
    /// Short editorial summary.
    pub summary: String,
    /// Ordered talking-point bullets.
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Tags assigned during enrichment.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tag → justification map. The service should provide one entry per
    /// tag, but the client does not enforce it; a missing entry renders
    /// with an empty justification.
    #[serde(default)]
    pub why_tagged: HashMap<String, String>,
    /// Human-readable location the item relates to, if geocoded.
    pub location_name: Option<String>,
    /// Geocoded latitude, if available.
    pub latitude: Option<f64>,
    /// Geocoded longitude, if available.
    pub longitude: Option<f64>,
    /// Open-ended weather enrichment payload, rendered verbatim if at all.
    #[serde(default)]
    pub weather_context: serde_json::Value,
    /// Free-text notes about weather coverage quality.
    #[serde(default)]
    pub weather_coverage_notes: String,
    /// Marks the pack as time-sensitive in the review queue.
    pub breaking: bool,
    /// Distance from the configured home point, in kilometers.
    pub distance_km: Option<f64>,
    /// Current lifecycle state.
    pub status: ContentPackStatus,
    /// Reviewer-editable free text.
    #[serde(default)]
    pub reviewer_notes: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Candidate creative renditions, in generation order.
    #[serde(default)]
    pub drafts: Vec<CreativeDraft>,
    /// Media assets attached to the pack.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Attribution requirements, when the source imposes any.
    pub attribution: Option<Attribution>,
}

/// One candidate rendition of a pack's marketing copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreativeDraft {
    /// Unique draft identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Name of the generator plugin that produced this draft.
    pub generator_name: String,
    /// Candidate headlines, best-first.
    #[serde(default)]
    pub headline_options: Vec<String>,
    /// Open-ended cover layout spec, rendered verbatim.
    #[serde(default)]
    pub cover_spec: serde_json::Value,
    /// Short-form caption.
    pub caption_short: String,
    /// Long-form caption.
    pub caption_long: String,
    /// Open-ended carousel outline, rendered verbatim.
    #[serde(default)]
    pub carousel_outline: serde_json::Value,
}

/// Media kind of an attached asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Video,
    Image,
}

impl AssetKind {
    /// Wire spelling of the asset kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

/// A media asset attached to a content pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Source URL of the asset.
    pub url: String,
    /// Media kind; the wire key is `type`.
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Platform the asset was collected from.
    pub provider: String,
    /// Creator handle on the source platform, if known.
    pub creator_handle: Option<String>,
    /// Local mirror path, when the asset has been fetched.
    pub local_storage_path: Option<String>,
    /// Rights-clearance state (e.g. `"manual"`).
    pub rights_status: String,
}

/// Attribution requirements for reposting a pack's source material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Credit line that must accompany any repost.
    pub required_credit_line: String,
    /// Free-text attribution notes.
    pub notes: String,
    /// Whether the source permits reposting at all.
    pub safe_to_repost: bool,
}

/// Response from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// Token scheme; the service always issues bearer tokens.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
