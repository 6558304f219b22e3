use crate::compliance::domain::{Identified, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked security/compliance event with an SLA deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    #[serde(default)]
    pub sla_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updates: Vec<IncidentUpdate>,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// One entry of the incident's response timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentUpdate {
    pub at: DateTime<Utc>,
    pub author: String,
    pub note: String,
}

/// Lifecycle: Open → Investigating → Mitigated → Resolved → Closed.
///
/// Strictly forward, one step at a time. The server enforces this; the
/// client checks it before dispatching to keep the console responsive on
/// obviously invalid requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    Investigating,
    Mitigated,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn can_transition_to(self, next: IncidentStatus) -> bool {
        self.next_step() == Some(next)
    }

    /// The only status reachable from the current one, if any.
    pub fn next_step(self) -> Option<IncidentStatus> {
        use IncidentStatus::*;
        match self {
            Open => Some(Investigating),
            Investigating => Some(Mitigated),
            Mitigated => Some(Resolved),
            Resolved => Some(Closed),
            Closed => None,
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Mitigated => "Mitigated",
            IncidentStatus::Resolved => "Resolved",
            IncidentStatus::Closed => "Closed",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IncidentStatus::Open),
            "investigating" => Ok(IncidentStatus::Investigating),
            "mitigated" => Ok(IncidentStatus::Mitigated),
            "resolved" => Ok(IncidentStatus::Resolved),
            "closed" => Ok(IncidentStatus::Closed),
            _ => Err(format!(
                "Invalid incident status: {}. Expected one of: open, investigating, mitigated, resolved, closed",
                s
            )),
        }
    }
}

impl Incident {
    /// True when the SLA deadline has passed without the incident being
    /// resolved or closed.
    pub fn sla_breached(&self, now: DateTime<Utc>) -> bool {
        match (self.sla_deadline, self.status) {
            (_, IncidentStatus::Resolved | IncidentStatus::Closed) => false,
            (Some(deadline), _) => now > deadline,
            (None, _) => false,
        }
    }
}

impl Identified for Incident {
    fn id(&self) -> Uuid {
        self.id
    }
}
