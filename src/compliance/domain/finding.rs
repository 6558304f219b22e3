use crate::compliance::domain::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded compliance gap with a remediation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    pub status: FindingStatus,
    pub risk_likelihood: RiskLevel,
    pub risk_impact: RiskLevel,
    #[serde(default)]
    pub framework_id: Option<Uuid>,
    #[serde(default)]
    pub remediation_tasks: Vec<RemediationTask>,
    #[serde(default)]
    pub evidence: Vec<EvidenceRef>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Severity scale shared by findings and incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!(
                "Invalid severity: {}. Expected one of: low, medium, high, critical",
                s
            )),
        }
    }
}

/// Workflow state of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingStatus {
    Open,
    #[serde(rename = "In Remediation")]
    InRemediation,
    Resolved,
    #[serde(rename = "Risk Accepted")]
    RiskAccepted,
    Closed,
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FindingStatus::Open => "Open",
            FindingStatus::InRemediation => "In Remediation",
            FindingStatus::Resolved => "Resolved",
            FindingStatus::RiskAccepted => "Risk Accepted",
            FindingStatus::Closed => "Closed",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for FindingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "open" => Ok(FindingStatus::Open),
            "in remediation" | "remediation" => Ok(FindingStatus::InRemediation),
            "resolved" => Ok(FindingStatus::Resolved),
            "risk accepted" | "accepted" => Ok(FindingStatus::RiskAccepted),
            "closed" => Ok(FindingStatus::Closed),
            _ => Err(format!(
                "Invalid finding status: {}. Expected one of: open, in-remediation, resolved, risk-accepted, closed",
                s
            )),
        }
    }
}

/// Qualitative risk rating used for likelihood and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!(
                "Invalid risk level: {}. Expected one of: low, medium, high",
                s
            )),
        }
    }
}

/// One step of a finding's remediation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationTask {
    pub id: Uuid,
    pub description: String,
    pub done: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Pointer to an uploaded evidence attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRef {
    pub id: Uuid,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A free-form comment on a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// An audit-trail entry recorded by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub event: String,
}

impl Finding {
    /// Count of remediation tasks already marked done.
    pub fn completed_tasks(&self) -> usize {
        self.remediation_tasks.iter().filter(|t| t.done).count()
    }
}

impl Identified for Finding {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_finding_status_wire_names() {
        let json = serde_json::to_string(&FindingStatus::InRemediation).unwrap();
        assert_eq!(json, "\"In Remediation\"");
        let parsed: FindingStatus = serde_json::from_str("\"Risk Accepted\"").unwrap();
        assert_eq!(parsed, FindingStatus::RiskAccepted);
    }

    #[test]
    fn test_finding_status_from_str() {
        assert_eq!(
            FindingStatus::from_str("in-remediation").unwrap(),
            FindingStatus::InRemediation
        );
        assert_eq!(
            FindingStatus::from_str("accepted").unwrap(),
            FindingStatus::RiskAccepted
        );
        assert!(FindingStatus::from_str("wontfix").is_err());
    }

    #[test]
    fn test_completed_tasks() {
        let finding = Finding {
            id: Uuid::new_v4(),
            title: "Unencrypted backups".to_string(),
            description: String::new(),
            severity: Severity::High,
            status: FindingStatus::InRemediation,
            risk_likelihood: RiskLevel::Medium,
            risk_impact: RiskLevel::High,
            framework_id: None,
            remediation_tasks: vec![
                RemediationTask {
                    id: Uuid::new_v4(),
                    description: "Enable encryption at rest".to_string(),
                    done: true,
                    due_date: None,
                },
                RemediationTask {
                    id: Uuid::new_v4(),
                    description: "Rotate backup keys".to_string(),
                    done: false,
                    due_date: None,
                },
            ],
            evidence: vec![],
            comments: vec![],
            history: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(finding.completed_tasks(), 1);
    }
}
