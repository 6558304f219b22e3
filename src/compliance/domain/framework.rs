use crate::compliance::domain::Identified;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A compliance standard (e.g. ISO 27001) composed of control groups.
///
/// `compliance_score` and `implementation_progress` arrive from the server;
/// the client recomputes them after a control update purely as a display
/// projection. The server value is authoritative and overwrites the
/// projection on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub control_groups: Vec<ControlGroup>,
    /// Percentage in 0..=100, weighted by control status.
    pub compliance_score: f64,
    /// Percentage of applicable controls that have been started.
    pub implementation_progress: f64,
}

/// A named grouping of controls inside a framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub controls: Vec<Control>,
}

/// A single compliance requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub id: Uuid,
    /// Short reference code like "A.5.1".
    pub code: String,
    pub title: String,
    pub status: ImplementationStatus,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Implementation state of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImplementationStatus {
    Implemented,
    #[serde(rename = "Partially Implemented")]
    PartiallyImplemented,
    #[serde(rename = "Not Implemented")]
    NotImplemented,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl std::fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ImplementationStatus::Implemented => "Implemented",
            ImplementationStatus::PartiallyImplemented => "Partially Implemented",
            ImplementationStatus::NotImplemented => "Not Implemented",
            ImplementationStatus::NotApplicable => "Not Applicable",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ImplementationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "implemented" => Ok(ImplementationStatus::Implemented),
            "partially implemented" | "partial" => Ok(ImplementationStatus::PartiallyImplemented),
            "not implemented" => Ok(ImplementationStatus::NotImplemented),
            "not applicable" | "na" | "n/a" => Ok(ImplementationStatus::NotApplicable),
            _ => Err(format!(
                "Invalid control status: {}. Expected one of: implemented, partial, not-implemented, not-applicable",
                s
            )),
        }
    }
}

impl Framework {
    /// Iterates all controls across all groups in server order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.control_groups.iter().flat_map(|g| g.controls.iter())
    }

    /// Finds a control anywhere in the framework by id.
    pub fn find_control(&self, control_id: Uuid) -> Option<&Control> {
        self.controls().find(|c| c.id == control_id)
    }
}

impl Identified for Framework {
    fn id(&self) -> Uuid {
        self.id
    }
}
