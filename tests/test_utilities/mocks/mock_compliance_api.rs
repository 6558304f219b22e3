use anyhow::{anyhow, bail};
use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use grc_console::application::dto::{
    FindingPatch, ListQuery, NewFinding, NewIncident, NewPolicy, Page, PolicyPatch,
};
use grc_console::compliance::domain::{
    Comment, Control, DocumentRef, EvidenceRef, Finding, Framework, Identified,
    ImplementationStatus, Incident, IncidentStatus, IncidentUpdate, Policy, PolicyStatus,
    TrainingAssignment, TrainingCourse,
};
use grc_console::prelude::*;

use crate::test_utilities::fixtures;

/// Mock of the five entity APIs, backed by configured pages.
///
/// List calls record the outgoing query string so tests can assert on
/// the wire-level pagination. Mutations answer with the record the
/// server would confirm; nothing is persisted between calls.
pub struct MockComplianceApi {
    frameworks: std::result::Result<Page<Framework>, String>,
    policies: std::result::Result<Page<Policy>, String>,
    findings: std::result::Result<Page<Finding>, String>,
    incidents: std::result::Result<Page<Incident>, String>,
    courses: std::result::Result<Page<TrainingCourse>, String>,
    pub queries: Mutex<Vec<String>>,
}

impl MockComplianceApi {
    pub fn new() -> Self {
        Self {
            frameworks: Ok(Page::empty()),
            policies: Ok(Page::empty()),
            findings: Ok(Page::empty()),
            incidents: Ok(Page::empty()),
            courses: Ok(Page::empty()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_frameworks(mut self, page: Page<Framework>) -> Self {
        self.frameworks = Ok(page);
        self
    }

    pub fn with_policies(mut self, page: Page<Policy>) -> Self {
        self.policies = Ok(page);
        self
    }

    pub fn with_findings(mut self, page: Page<Finding>) -> Self {
        self.findings = Ok(page);
        self
    }

    pub fn with_incidents(mut self, page: Page<Incident>) -> Self {
        self.incidents = Ok(page);
        self
    }

    pub fn with_courses(mut self, page: Page<TrainingCourse>) -> Self {
        self.courses = Ok(page);
        self
    }

    pub fn with_failing_policies(mut self, message: &str) -> Self {
        self.policies = Err(message.to_string());
        self
    }

    pub fn with_failing_findings(mut self, message: &str) -> Self {
        self.findings = Err(message.to_string());
        self
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn list<T: Clone>(
        &self,
        source: &std::result::Result<Page<T>, String>,
        query: &ListQuery,
    ) -> Result<Page<T>> {
        self.queries.lock().unwrap().push(query.to_query_string());
        match source {
            Ok(page) => Ok(page.clone()),
            Err(message) => Err(anyhow!("{}", message)),
        }
    }

    fn find<T: Identified + Clone>(source: &std::result::Result<Page<T>, String>, id: Uuid) -> Result<T> {
        match source {
            Ok(page) => page
                .items
                .iter()
                .find(|record| record.id() == id)
                .cloned()
                .ok_or_else(|| anyhow!("Request failed with status 404")),
            Err(message) => bail!("{}", message),
        }
    }
}

impl Default for MockComplianceApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameworkApi for MockComplianceApi {
    async fn list_frameworks(&self, query: &ListQuery) -> Result<Page<Framework>> {
        self.list(&self.frameworks, query)
    }

    async fn fetch_framework(&self, id: Uuid) -> Result<Framework> {
        Self::find(&self.frameworks, id)
    }

    async fn set_control_status(
        &self,
        framework_id: Uuid,
        control_id: Uuid,
        status: ImplementationStatus,
    ) -> Result<Control> {
        let framework = Self::find(&self.frameworks, framework_id)?;
        let mut control = framework
            .find_control(control_id)
            .cloned()
            .ok_or_else(|| anyhow!("Request failed with status 404"))?;
        control.status = status;
        Ok(control)
    }
}

#[async_trait]
impl PolicyApi for MockComplianceApi {
    async fn list_policies(&self, query: &ListQuery) -> Result<Page<Policy>> {
        self.list(&self.policies, query)
    }

    async fn fetch_policy(&self, id: Uuid) -> Result<Policy> {
        Self::find(&self.policies, id)
    }

    async fn create_policy(&self, draft: &NewPolicy) -> Result<Policy> {
        Ok(Policy {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            category: draft.category.clone(),
            version: draft.version.clone(),
            status: PolicyStatus::Draft,
            summary: draft.summary.clone().unwrap_or_default(),
            document: None,
            updated_at: fixtures::timestamp(),
        })
    }

    async fn update_policy(&self, id: Uuid, patch: &PolicyPatch) -> Result<Policy> {
        let mut policy = Self::find(&self.policies, id)?;
        if let Some(title) = &patch.title {
            policy.title = title.clone();
        }
        if let Some(category) = &patch.category {
            policy.category = category.clone();
        }
        if let Some(version) = &patch.version {
            policy.version = version.clone();
        }
        if let Some(summary) = &patch.summary {
            policy.summary = summary.clone();
        }
        Ok(policy)
    }

    async fn delete_policy(&self, id: Uuid) -> Result<()> {
        Self::find(&self.policies, id).map(|_| ())
    }

    async fn transition_policy(&self, id: Uuid, to: PolicyStatus) -> Result<Policy> {
        let mut policy = Self::find(&self.policies, id)?;
        policy.status = to;
        Ok(policy)
    }

    async fn upload_policy_document(
        &self,
        id: Uuid,
        file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<Policy> {
        let mut policy = Self::find(&self.policies, id)?;
        policy.document = Some(DocumentRef {
            file_name: file_name.to_string(),
            uploaded_at: fixtures::timestamp(),
        });
        Ok(policy)
    }
}

#[async_trait]
impl FindingApi for MockComplianceApi {
    async fn list_findings(&self, query: &ListQuery) -> Result<Page<Finding>> {
        self.list(&self.findings, query)
    }

    async fn fetch_finding(&self, id: Uuid) -> Result<Finding> {
        Self::find(&self.findings, id)
    }

    async fn create_finding(&self, draft: &NewFinding) -> Result<Finding> {
        let mut finding = fixtures::finding(&draft.title);
        finding.description = draft.description.clone();
        finding.severity = draft.severity;
        finding.risk_likelihood = draft.risk_likelihood;
        finding.risk_impact = draft.risk_impact;
        finding.framework_id = draft.framework_id;
        Ok(finding)
    }

    async fn update_finding(&self, id: Uuid, patch: &FindingPatch) -> Result<Finding> {
        let mut finding = Self::find(&self.findings, id)?;
        if let Some(title) = &patch.title {
            finding.title = title.clone();
        }
        if let Some(description) = &patch.description {
            finding.description = description.clone();
        }
        if let Some(severity) = patch.severity {
            finding.severity = severity;
        }
        if let Some(status) = patch.status {
            finding.status = status;
        }
        if let Some(likelihood) = patch.risk_likelihood {
            finding.risk_likelihood = likelihood;
        }
        if let Some(impact) = patch.risk_impact {
            finding.risk_impact = impact;
        }
        Ok(finding)
    }

    async fn delete_finding(&self, id: Uuid) -> Result<()> {
        Self::find(&self.findings, id).map(|_| ())
    }

    async fn add_finding_comment(&self, id: Uuid, body: &str) -> Result<Finding> {
        let mut finding = Self::find(&self.findings, id)?;
        finding.comments.push(Comment {
            id: Uuid::new_v4(),
            author: "mock".to_string(),
            body: body.to_string(),
            created_at: fixtures::timestamp(),
        });
        Ok(finding)
    }

    async fn upload_finding_evidence(
        &self,
        id: Uuid,
        file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<Finding> {
        let mut finding = Self::find(&self.findings, id)?;
        finding.evidence.push(EvidenceRef {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            uploaded_at: fixtures::timestamp(),
        });
        Ok(finding)
    }
}

#[async_trait]
impl IncidentApi for MockComplianceApi {
    async fn list_incidents(&self, query: &ListQuery) -> Result<Page<Incident>> {
        self.list(&self.incidents, query)
    }

    async fn fetch_incident(&self, id: Uuid) -> Result<Incident> {
        Self::find(&self.incidents, id)
    }

    async fn report_incident(&self, draft: &NewIncident) -> Result<Incident> {
        let mut incident = fixtures::incident(&draft.title);
        incident.description = draft.description.clone();
        incident.severity = draft.severity;
        incident.sla_deadline = draft.sla_deadline;
        Ok(incident)
    }

    async fn transition_incident(&self, id: Uuid, to: IncidentStatus) -> Result<Incident> {
        let mut incident = Self::find(&self.incidents, id)?;
        incident.status = to;
        Ok(incident)
    }

    async fn add_incident_update(&self, id: Uuid, note: &str) -> Result<Incident> {
        let mut incident = Self::find(&self.incidents, id)?;
        incident.updates.push(IncidentUpdate {
            at: fixtures::timestamp(),
            author: "mock".to_string(),
            note: note.to_string(),
        });
        Ok(incident)
    }
}

#[async_trait]
impl TrainingApi for MockComplianceApi {
    async fn list_courses(&self, query: &ListQuery) -> Result<Page<TrainingCourse>> {
        self.list(&self.courses, query)
    }

    async fn fetch_course(&self, id: Uuid) -> Result<TrainingCourse> {
        Self::find(&self.courses, id)
    }

    async fn assign_course(&self, course_id: Uuid, user_id: Uuid) -> Result<TrainingCourse> {
        let mut course = Self::find(&self.courses, course_id)?;
        course.assignments.push(TrainingAssignment {
            id: Uuid::new_v4(),
            user_id,
            status: grc_console::compliance::domain::AssignmentStatus::Assigned,
            due_date: None,
            completed_at: None,
        });
        Ok(course)
    }

    async fn complete_assignment(
        &self,
        course_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<TrainingCourse> {
        let mut course = Self::find(&self.courses, course_id)?;
        let assignment = course
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| anyhow!("Request failed with status 404"))?;
        assignment.status = grc_console::compliance::domain::AssignmentStatus::Completed;
        assignment.completed_at = Some(fixtures::timestamp());
        Ok(course)
    }
}
