use crate::application::dto::{
    FindingPatch, ListQuery, LoginResponse, NewFinding, NewIncident, NewPolicy, Page, PolicyPatch,
    SessionTokens,
};
use crate::compliance::domain::{
    Control, Finding, Framework, ImplementationStatus, Incident, IncidentStatus, Policy,
    PolicyStatus, TrainingCourse, User,
};
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// AuthApi port for the `/auth/*` session lifecycle
///
/// Implementations own the bearer token they attach to subsequent
/// requests: a successful login or refresh installs the new token pair
/// internally, logout discards it.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`. On success the adapter starts attaching the
    /// returned bearer token to authenticated requests.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// `POST /auth/refresh`. Exchanges the refresh token for a new pair.
    async fn refresh(&self, refresh_token: &str) -> Result<SessionTokens>;

    /// `POST /auth/logout`. Best-effort server-side invalidation; the
    /// adapter drops its tokens regardless of the server's answer.
    async fn logout(&self) -> Result<()>;

    /// `GET /auth/me`.
    async fn current_user(&self) -> Result<User>;
}

/// Frameworks and their controls under `/api/frameworks`.
#[async_trait]
pub trait FrameworkApi: Send + Sync {
    async fn list_frameworks(&self, query: &ListQuery) -> Result<Page<Framework>>;

    async fn fetch_framework(&self, id: Uuid) -> Result<Framework>;

    /// `PUT /api/frameworks/{id}/controls/{control_id}`. Returns the
    /// updated control; the caller reconciles it into local state.
    async fn set_control_status(
        &self,
        framework_id: Uuid,
        control_id: Uuid,
        status: ImplementationStatus,
    ) -> Result<Control>;
}

/// Policy CRUD and lifecycle under `/api/policies`.
#[async_trait]
pub trait PolicyApi: Send + Sync {
    async fn list_policies(&self, query: &ListQuery) -> Result<Page<Policy>>;

    async fn fetch_policy(&self, id: Uuid) -> Result<Policy>;

    async fn create_policy(&self, draft: &NewPolicy) -> Result<Policy>;

    async fn update_policy(&self, id: Uuid, patch: &PolicyPatch) -> Result<Policy>;

    async fn delete_policy(&self, id: Uuid) -> Result<()>;

    /// `POST /api/policies/{id}/transition` with the requested target
    /// status. The server enforces the workflow and answers with the
    /// resulting record.
    async fn transition_policy(&self, id: Uuid, to: PolicyStatus) -> Result<Policy>;

    /// Multipart upload of the policy document.
    async fn upload_policy_document(
        &self,
        id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Policy>;
}

/// Finding CRUD, comments and evidence under `/api/findings`.
#[async_trait]
pub trait FindingApi: Send + Sync {
    async fn list_findings(&self, query: &ListQuery) -> Result<Page<Finding>>;

    async fn fetch_finding(&self, id: Uuid) -> Result<Finding>;

    async fn create_finding(&self, draft: &NewFinding) -> Result<Finding>;

    async fn update_finding(&self, id: Uuid, patch: &FindingPatch) -> Result<Finding>;

    async fn delete_finding(&self, id: Uuid) -> Result<()>;

    async fn add_finding_comment(&self, id: Uuid, body: &str) -> Result<Finding>;

    /// Multipart upload of an evidence attachment.
    async fn upload_finding_evidence(
        &self,
        id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Finding>;
}

/// Incident reporting and lifecycle under `/api/incidents`.
#[async_trait]
pub trait IncidentApi: Send + Sync {
    async fn list_incidents(&self, query: &ListQuery) -> Result<Page<Incident>>;

    async fn fetch_incident(&self, id: Uuid) -> Result<Incident>;

    async fn report_incident(&self, draft: &NewIncident) -> Result<Incident>;

    async fn transition_incident(&self, id: Uuid, to: IncidentStatus) -> Result<Incident>;

    async fn add_incident_update(&self, id: Uuid, note: &str) -> Result<Incident>;
}

/// Training courses and assignments under `/api/training`.
#[async_trait]
pub trait TrainingApi: Send + Sync {
    async fn list_courses(&self, query: &ListQuery) -> Result<Page<TrainingCourse>>;

    async fn fetch_course(&self, id: Uuid) -> Result<TrainingCourse>;

    async fn assign_course(&self, course_id: Uuid, user_id: Uuid) -> Result<TrainingCourse>;

    async fn complete_assignment(
        &self,
        course_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<TrainingCourse>;
}
