//! List and detail fetch orchestration.
//!
//! Every fetch goes through the slice's token discipline: the token is
//! issued before the request leaves, and the response is applied only if
//! no newer fetch has been started in the meantime. A rejected request
//! records its message in the slice and propagates the error; previously
//! loaded data is never dropped.

use crate::application::dto::{ListQuery, Page};
use crate::application::store::CollectionSlice;
use crate::compliance::domain::Identified;
use crate::shared::Result;
use std::future::Future;
use uuid::Uuid;

/// Fetches the slice's current page with its current filters and applies
/// the outcome under the slice's request token.
pub async fn refresh_list<T, F, Fut>(slice: &mut CollectionSlice<T>, fetch: F) -> Result<()>
where
    T: Identified + Clone,
    F: FnOnce(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let token = slice.begin_list_fetch();
    let query = slice.query();
    match fetch(query).await {
        Ok(page) => {
            slice.apply_list_success(token, page);
            Ok(())
        }
        Err(error) => {
            slice.apply_list_failure(token, error.to_string());
            Err(error)
        }
    }
}

/// Fetches one record into the slice's detail slot.
pub async fn refresh_detail<T, F, Fut>(
    slice: &mut CollectionSlice<T>,
    id: Uuid,
    fetch: F,
) -> Result<()>
where
    T: Identified + Clone,
    F: FnOnce(Uuid) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let token = slice.begin_detail_fetch();
    match fetch(id).await {
        Ok(record) => {
            slice.apply_detail_success(token, record);
            Ok(())
        }
        Err(error) => {
            slice.apply_detail_failure(token, error.to_string());
            Err(error)
        }
    }
}
