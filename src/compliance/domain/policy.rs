use crate::compliance::domain::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A versioned policy document with an approval/publication lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub version: String,
    pub status: PolicyStatus,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub document: Option<DocumentRef>,
    pub updated_at: DateTime<Utc>,
}

/// Pointer to the uploaded policy document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Lifecycle: Draft → In Review → Approved → Published → Deprecated.
///
/// A rejected review drops back to Draft, and an approved-but-unpublished
/// policy can be deprecated directly. The server enforces the workflow;
/// `can_transition_to` is a client-side convenience so the console can
/// refuse obviously invalid moves before making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    Draft,
    #[serde(rename = "In Review")]
    InReview,
    Approved,
    Published,
    Deprecated,
}

impl PolicyStatus {
    pub fn can_transition_to(self, next: PolicyStatus) -> bool {
        use PolicyStatus::*;
        matches!(
            (self, next),
            (Draft, InReview)
                | (InReview, Approved)
                | (InReview, Draft)
                | (Approved, Published)
                | (Approved, Deprecated)
                | (Published, Deprecated)
        )
    }
}

impl std::fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PolicyStatus::Draft => "Draft",
            PolicyStatus::InReview => "In Review",
            PolicyStatus::Approved => "Approved",
            PolicyStatus::Published => "Published",
            PolicyStatus::Deprecated => "Deprecated",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for PolicyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "draft" => Ok(PolicyStatus::Draft),
            "in review" | "review" => Ok(PolicyStatus::InReview),
            "approved" => Ok(PolicyStatus::Approved),
            "published" => Ok(PolicyStatus::Published),
            "deprecated" => Ok(PolicyStatus::Deprecated),
            _ => Err(format!(
                "Invalid policy status: {}. Expected one of: draft, in-review, approved, published, deprecated",
                s
            )),
        }
    }
}

impl Identified for Policy {
    fn id(&self) -> Uuid {
        self.id
    }
}
