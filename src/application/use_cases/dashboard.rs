//! Aggregate overview: first page of every slice, fetched concurrently.

use crate::application::store::AppStore;
use crate::ports::outbound::{FindingApi, FrameworkApi, IncidentApi, PolicyApi, TrainingApi};
use crate::shared::Result;

/// Fetches the first page of all five collections in one round of
/// concurrent requests. Individual failures become warnings rather than
/// aborting the whole overview; each slice keeps its own error state.
pub async fn load_overview<A>(api: &A, store: &mut AppStore) -> Result<()>
where
    A: FrameworkApi + PolicyApi + FindingApi + IncidentApi + TrainingApi,
{
    let frameworks_token = store.frameworks.begin_list_fetch();
    let policies_token = store.policies.begin_list_fetch();
    let findings_token = store.findings.begin_list_fetch();
    let incidents_token = store.incidents.begin_list_fetch();
    let training_token = store.training.begin_list_fetch();

    let frameworks_query = store.frameworks.query();
    let policies_query = store.policies.query();
    let findings_query = store.findings.query();
    let incidents_query = store.incidents.query();
    let training_query = store.training.query();

    let (frameworks, policies, findings, incidents, training) = futures::join!(
        api.list_frameworks(&frameworks_query),
        api.list_policies(&policies_query),
        api.list_findings(&findings_query),
        api.list_incidents(&incidents_query),
        api.list_courses(&training_query),
    );

    match frameworks {
        Ok(page) => {
            store.frameworks.apply_list_success(frameworks_token, page);
        }
        Err(error) => {
            store
                .frameworks
                .apply_list_failure(frameworks_token, error.to_string());
            store
                .notifications
                .warning(format!("Frameworks unavailable: {}", error));
        }
    }
    match policies {
        Ok(page) => {
            store.policies.apply_list_success(policies_token, page);
        }
        Err(error) => {
            store
                .policies
                .apply_list_failure(policies_token, error.to_string());
            store
                .notifications
                .warning(format!("Policies unavailable: {}", error));
        }
    }
    match findings {
        Ok(page) => {
            store.findings.apply_list_success(findings_token, page);
        }
        Err(error) => {
            store
                .findings
                .apply_list_failure(findings_token, error.to_string());
            store
                .notifications
                .warning(format!("Findings unavailable: {}", error));
        }
    }
    match incidents {
        Ok(page) => {
            store.incidents.apply_list_success(incidents_token, page);
        }
        Err(error) => {
            store
                .incidents
                .apply_list_failure(incidents_token, error.to_string());
            store
                .notifications
                .warning(format!("Incidents unavailable: {}", error));
        }
    }
    match training {
        Ok(page) => {
            store.training.apply_list_success(training_token, page);
        }
        Err(error) => {
            store
                .training
                .apply_list_failure(training_token, error.to_string());
            store
                .notifications
                .warning(format!("Training unavailable: {}", error));
        }
    }

    Ok(())
}
