//! Port trait implementations over [`RestClient`].
//!
//! Each method maps one REST endpoint. List endpoints forward the slice's
//! query parameters verbatim; the server does all sorting and filtering.

use crate::adapters::outbound::network::rest_client::RestClient;
use crate::application::dto::{
    FindingPatch, ListQuery, LoginResponse, NewFinding, NewIncident, NewPolicy, Page, PolicyPatch,
    SessionTokens,
};
use crate::compliance::domain::{
    Control, Finding, Framework, ImplementationStatus, Incident, IncidentStatus, Policy,
    PolicyStatus, TrainingCourse, User,
};
use crate::ports::outbound::{AuthApi, FindingApi, FrameworkApi, IncidentApi, PolicyApi, TrainingApi};
use crate::shared::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl AuthApi for RestClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self.post_json("/auth/login", &body).await?;
        self.set_session(response.tokens());
        Ok(response)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<SessionTokens> {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        let tokens: SessionTokens = self.post_json("/auth/refresh", &body).await?;
        self.set_session(tokens.clone());
        Ok(tokens)
    }

    async fn logout(&self) -> Result<()> {
        let result = self
            .post_json::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}))
            .await;
        // Local tokens are gone either way; the server call is best-effort.
        self.clear_session();
        result.map(|_| ()).map_err(Into::into)
    }

    async fn current_user(&self) -> Result<User> {
        Ok(self.get_json("/auth/me", &[]).await?)
    }
}

#[async_trait]
impl FrameworkApi for RestClient {
    async fn list_frameworks(&self, query: &ListQuery) -> Result<Page<Framework>> {
        Ok(self
            .get_json("/api/frameworks", &query.to_query_pairs())
            .await?)
    }

    async fn fetch_framework(&self, id: Uuid) -> Result<Framework> {
        Ok(self.get_json(&format!("/api/frameworks/{}", id), &[]).await?)
    }

    async fn set_control_status(
        &self,
        framework_id: Uuid,
        control_id: Uuid,
        status: ImplementationStatus,
    ) -> Result<Control> {
        let body = serde_json::json!({ "status": status });
        Ok(self
            .put_json(
                &format!("/api/frameworks/{}/controls/{}", framework_id, control_id),
                &body,
            )
            .await?)
    }
}

#[async_trait]
impl PolicyApi for RestClient {
    async fn list_policies(&self, query: &ListQuery) -> Result<Page<Policy>> {
        Ok(self
            .get_json("/api/policies", &query.to_query_pairs())
            .await?)
    }

    async fn fetch_policy(&self, id: Uuid) -> Result<Policy> {
        Ok(self.get_json(&format!("/api/policies/{}", id), &[]).await?)
    }

    async fn create_policy(&self, draft: &NewPolicy) -> Result<Policy> {
        Ok(self.post_json("/api/policies", draft).await?)
    }

    async fn update_policy(&self, id: Uuid, patch: &PolicyPatch) -> Result<Policy> {
        Ok(self
            .put_json(&format!("/api/policies/{}", id), patch)
            .await?)
    }

    async fn delete_policy(&self, id: Uuid) -> Result<()> {
        Ok(self.delete(&format!("/api/policies/{}", id)).await?)
    }

    async fn transition_policy(&self, id: Uuid, to: PolicyStatus) -> Result<Policy> {
        let body = serde_json::json!({ "status": to });
        Ok(self
            .post_json(&format!("/api/policies/{}/transition", id), &body)
            .await?)
    }

    async fn upload_policy_document(
        &self,
        id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Policy> {
        Ok(self
            .post_multipart(
                &format!("/api/policies/{}/document", id),
                "document",
                file_name,
                bytes,
            )
            .await?)
    }
}

#[async_trait]
impl FindingApi for RestClient {
    async fn list_findings(&self, query: &ListQuery) -> Result<Page<Finding>> {
        Ok(self
            .get_json("/api/findings", &query.to_query_pairs())
            .await?)
    }

    async fn fetch_finding(&self, id: Uuid) -> Result<Finding> {
        Ok(self.get_json(&format!("/api/findings/{}", id), &[]).await?)
    }

    async fn create_finding(&self, draft: &NewFinding) -> Result<Finding> {
        Ok(self.post_json("/api/findings", draft).await?)
    }

    async fn update_finding(&self, id: Uuid, patch: &FindingPatch) -> Result<Finding> {
        Ok(self
            .put_json(&format!("/api/findings/{}", id), patch)
            .await?)
    }

    async fn delete_finding(&self, id: Uuid) -> Result<()> {
        Ok(self.delete(&format!("/api/findings/{}", id)).await?)
    }

    async fn add_finding_comment(&self, id: Uuid, body: &str) -> Result<Finding> {
        let payload = serde_json::json!({ "body": body });
        Ok(self
            .post_json(&format!("/api/findings/{}/comments", id), &payload)
            .await?)
    }

    async fn upload_finding_evidence(
        &self,
        id: Uuid,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Finding> {
        Ok(self
            .post_multipart(
                &format!("/api/findings/{}/evidence", id),
                "evidence",
                file_name,
                bytes,
            )
            .await?)
    }
}

#[async_trait]
impl IncidentApi for RestClient {
    async fn list_incidents(&self, query: &ListQuery) -> Result<Page<Incident>> {
        Ok(self
            .get_json("/api/incidents", &query.to_query_pairs())
            .await?)
    }

    async fn fetch_incident(&self, id: Uuid) -> Result<Incident> {
        Ok(self
            .get_json(&format!("/api/incidents/{}", id), &[])
            .await?)
    }

    async fn report_incident(&self, draft: &NewIncident) -> Result<Incident> {
        Ok(self.post_json("/api/incidents", draft).await?)
    }

    async fn transition_incident(&self, id: Uuid, to: IncidentStatus) -> Result<Incident> {
        let body = serde_json::json!({ "status": to });
        Ok(self
            .post_json(&format!("/api/incidents/{}/transition", id), &body)
            .await?)
    }

    async fn add_incident_update(&self, id: Uuid, note: &str) -> Result<Incident> {
        let body = serde_json::json!({ "note": note });
        Ok(self
            .post_json(&format!("/api/incidents/{}/updates", id), &body)
            .await?)
    }
}

#[async_trait]
impl TrainingApi for RestClient {
    async fn list_courses(&self, query: &ListQuery) -> Result<Page<TrainingCourse>> {
        Ok(self
            .get_json("/api/training", &query.to_query_pairs())
            .await?)
    }

    async fn fetch_course(&self, id: Uuid) -> Result<TrainingCourse> {
        Ok(self.get_json(&format!("/api/training/{}", id), &[]).await?)
    }

    async fn assign_course(&self, course_id: Uuid, user_id: Uuid) -> Result<TrainingCourse> {
        let body = serde_json::json!({ "userId": user_id });
        Ok(self
            .post_json(&format!("/api/training/{}/assignments", course_id), &body)
            .await?)
    }

    async fn complete_assignment(
        &self,
        course_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<TrainingCourse> {
        let body = serde_json::json!({ "status": "Completed" });
        Ok(self
            .put_json(
                &format!("/api/training/{}/assignments/{}", course_id, assignment_id),
                &body,
            )
            .await?)
    }
}
