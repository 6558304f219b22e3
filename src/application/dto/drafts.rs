//! Request bodies for create and update calls.
//!
//! Patch types serialize only the fields that are set, so a partial update
//! never clobbers server-side fields the user did not touch.

use crate::compliance::domain::{RiskLevel, Severity};
use serde::Serialize;
use uuid::Uuid;

/// Body of `POST /api/policies`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    pub title: String,
    pub category: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Body of `PUT /api/policies/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Body of `POST /api/findings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinding {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub risk_likelihood: RiskLevel,
    pub risk_impact: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<Uuid>,
}

/// Body of `PUT /api/findings/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<crate::compliance::domain::FindingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_likelihood: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_impact: Option<RiskLevel>,
}

/// Body of `POST /api/incidents`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_deadline: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = PolicyPatch {
            title: Some("Acceptable Use".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"title":"Acceptable Use"}"#);
    }

    #[test]
    fn test_new_finding_wire_shape() {
        let draft = NewFinding {
            title: "Stale accounts".to_string(),
            description: "Inactive accounts retain access".to_string(),
            severity: Severity::Medium,
            risk_likelihood: RiskLevel::High,
            risk_impact: RiskLevel::Medium,
            framework_id: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["severity"], "Medium");
        assert_eq!(value["riskLikelihood"], "High");
        assert!(value.get("frameworkId").is_none());
    }
}
