//! Control status updates with the local score projection.

use crate::application::store::AppStore;
use crate::compliance::domain::ImplementationStatus;
use crate::compliance::services::apply_control_update;
use crate::ports::outbound::FrameworkApi;
use crate::shared::Result;
use uuid::Uuid;

/// Updates one control's implementation status.
///
/// The server confirms with the updated control. The framework detail
/// (when loaded) gets the control patched in and its score/progress
/// recomputed locally so the view reflects the change immediately; the
/// server's numbers remain authoritative and win on the next fetch.
pub async fn set_control_status<A: FrameworkApi>(
    api: &A,
    store: &mut AppStore,
    framework_id: Uuid,
    control_id: Uuid,
    status: ImplementationStatus,
) -> Result<()> {
    let control = match api
        .set_control_status(framework_id, control_id, status)
        .await
    {
        Ok(control) => control,
        Err(error) => {
            store
                .notifications
                .error(format!("Failed to update control: {}", error));
            return Err(error);
        }
    };

    let mut projected = None;
    if let Some(framework) = store.frameworks.detail_mut() {
        if framework.id == framework_id && apply_control_update(framework, &control) {
            projected = Some(framework.clone());
        }
    }
    if let Some(framework) = projected {
        // Keep the list row in step with the projected detail.
        store.frameworks.reconcile_updated(framework);
    }

    store.notifications.success(format!(
        "Control {} set to {}",
        control.code, control.status
    ));
    Ok(())
}
