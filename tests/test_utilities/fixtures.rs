use chrono::{DateTime, TimeZone, Utc};
use grc_console::application::dto::Page;
use grc_console::compliance::domain::{
    Control, ControlGroup, CourseStatus, Finding, FindingStatus, Framework, ImplementationStatus,
    Incident, IncidentStatus, Policy, PolicyStatus, RiskLevel, Role, Severity, TrainingCourse,
    User,
};
use uuid::Uuid;

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
}

pub fn user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "ana@example.com".to_string(),
        name: "Ana Souza".to_string(),
        role: Role::ComplianceManager,
    }
}

pub fn framework(name: &str) -> Framework {
    Framework {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: String::new(),
        control_groups: vec![ControlGroup {
            id: Uuid::new_v4(),
            name: "Access Control".to_string(),
            controls: vec![
                Control {
                    id: Uuid::new_v4(),
                    code: "A.5.1".to_string(),
                    title: "Access policy".to_string(),
                    status: ImplementationStatus::Implemented,
                    owner: None,
                },
                Control {
                    id: Uuid::new_v4(),
                    code: "A.5.2".to_string(),
                    title: "Privileged access".to_string(),
                    status: ImplementationStatus::NotImplemented,
                    owner: None,
                },
            ],
        }],
        compliance_score: 50.0,
        implementation_progress: 50.0,
    }
}

pub fn policy(title: &str) -> Policy {
    Policy {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category: "Security".to_string(),
        version: "1.0".to_string(),
        status: PolicyStatus::Draft,
        summary: String::new(),
        document: None,
        updated_at: timestamp(),
    }
}

pub fn finding(title: &str) -> Finding {
    Finding {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        severity: Severity::Medium,
        status: FindingStatus::Open,
        risk_likelihood: RiskLevel::Medium,
        risk_impact: RiskLevel::Medium,
        framework_id: None,
        remediation_tasks: vec![],
        evidence: vec![],
        comments: vec![],
        history: vec![],
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn incident(title: &str) -> Incident {
    Incident {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        severity: Severity::High,
        status: IncidentStatus::Open,
        sla_deadline: None,
        updates: vec![],
        reported_at: timestamp(),
        resolved_at: None,
    }
}

pub fn course(title: &str) -> TrainingCourse {
    TrainingCourse {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        status: CourseStatus::Active,
        assignments: vec![],
    }
}

pub fn page_of<T>(items: Vec<T>) -> Page<T> {
    Page {
        page: 1,
        pages: 1,
        total: items.len() as u64,
        items,
    }
}
