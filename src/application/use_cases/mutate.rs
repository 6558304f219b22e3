//! Mutation orchestration: run the API call, then reconcile the slice
//! in place so already-loaded lists reflect the change without a
//! re-fetch. Failures leave the slice untouched and surface a toast.

use crate::application::store::{CollectionSlice, NotificationQueue};
use crate::compliance::domain::Identified;
use crate::shared::Result;
use std::future::Future;
use uuid::Uuid;

/// Creates an entity and prepends the confirmed record to the list.
pub async fn create_entity<T, Fut>(
    slice: &mut CollectionSlice<T>,
    notifications: &mut NotificationQueue,
    label: &str,
    call: Fut,
) -> Result<T>
where
    T: Identified + Clone,
    Fut: Future<Output = Result<T>>,
{
    match call.await {
        Ok(record) => {
            slice.reconcile_created(record.clone());
            notifications.success(format!("{} created", label));
            Ok(record)
        }
        Err(error) => {
            notifications.error(format!("Failed to create {}: {}", label, error));
            Err(error)
        }
    }
}

/// Updates an entity and patches the confirmed record into the loaded
/// list and detail slot.
pub async fn update_entity<T, Fut>(
    slice: &mut CollectionSlice<T>,
    notifications: &mut NotificationQueue,
    message: &str,
    call: Fut,
) -> Result<T>
where
    T: Identified + Clone,
    Fut: Future<Output = Result<T>>,
{
    match call.await {
        Ok(record) => {
            slice.reconcile_updated(record.clone());
            notifications.success(message.to_string());
            Ok(record)
        }
        Err(error) => {
            notifications.error(error.to_string());
            Err(error)
        }
    }
}

/// Deletes an entity, then removes it from the list and clears the
/// detail slot if it was the active detail.
pub async fn delete_entity<T, Fut>(
    slice: &mut CollectionSlice<T>,
    notifications: &mut NotificationQueue,
    label: &str,
    id: Uuid,
    call: Fut,
) -> Result<()>
where
    T: Identified + Clone,
    Fut: Future<Output = Result<()>>,
{
    match call.await {
        Ok(()) => {
            slice.reconcile_removed(id);
            notifications.success(format!("{} deleted", label));
            Ok(())
        }
        Err(error) => {
            notifications.error(format!("Failed to delete {}: {}", label, error));
            Err(error)
        }
    }
}
