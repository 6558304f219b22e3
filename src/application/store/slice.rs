use crate::application::dto::{ListFilters, ListQuery, Page};
use crate::application::store::collection::IndexedCollection;
use crate::application::store::load_state::LoadState;
use crate::compliance::domain::Identified;
use uuid::Uuid;

/// Token identifying one fetch. Tokens are issued monotonically per slice
/// and only the response carrying the latest token is applied; anything
/// older is a stale response from a superseded request and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// State of the slice's list stream.
///
/// List data itself lives outside this enum so a failed re-fetch can
/// surface its error while the previously loaded rows stay visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl FetchPhase {
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Client state for one domain entity family: an indexed collection with
/// pagination cursors and filters, plus a detail slot.
///
/// All mutation goes through `begin_*` / `apply_*` pairs guarded by
/// request tokens, or through the `reconcile_*` functions that patch
/// state after a confirmed mutation.
#[derive(Debug)]
pub struct CollectionSlice<T> {
    collection: IndexedCollection<T>,
    page: u32,
    pages: u32,
    total: u64,
    filters: ListFilters,
    list_phase: FetchPhase,
    detail: LoadState<T>,
    seq: u64,
    latest_list_token: Option<RequestToken>,
    latest_detail_token: Option<RequestToken>,
}

impl<T> Default for CollectionSlice<T> {
    fn default() -> Self {
        Self {
            collection: IndexedCollection::default(),
            page: 1,
            pages: 0,
            total: 0,
            filters: ListFilters::default(),
            list_phase: FetchPhase::Idle,
            detail: LoadState::Idle,
            seq: 0,
            latest_list_token: None,
            latest_detail_token: None,
        }
    }
}

impl<T: Identified + Clone> CollectionSlice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- filters and pagination ----

    /// Replaces the filter set. Any filter change resets pagination to the
    /// first page so the next fetch cannot land beyond the filtered result.
    pub fn set_filters(&mut self, filters: ListFilters) {
        if self.filters != filters {
            self.filters = filters;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// The query a list fetch should send right now.
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.page, self.filters.clone())
    }

    // ---- list fetch lifecycle ----

    /// Marks a list fetch as started and returns its token. Starting a new
    /// fetch supersedes any fetch still in flight.
    pub fn begin_list_fetch(&mut self) -> RequestToken {
        let token = self.next_token();
        self.latest_list_token = Some(token);
        self.list_phase = FetchPhase::Loading;
        token
    }

    /// Applies a successful list response. Returns false (and changes
    /// nothing) when the token is not the latest one.
    pub fn apply_list_success(&mut self, token: RequestToken, page: Page<T>) -> bool {
        if self.latest_list_token != Some(token) {
            return false;
        }
        self.collection.replace_all(page.items);
        self.page = page.page.max(1);
        self.pages = page.pages;
        self.total = page.total;
        self.list_phase = FetchPhase::Ready;
        true
    }

    /// Records a failed list fetch. Prior collection data stays untouched;
    /// only the phase carries the error. Stale tokens are ignored.
    pub fn apply_list_failure(&mut self, token: RequestToken, message: String) -> bool {
        if self.latest_list_token != Some(token) {
            return false;
        }
        self.list_phase = FetchPhase::Failed(message);
        true
    }

    // ---- detail fetch lifecycle ----

    pub fn begin_detail_fetch(&mut self) -> RequestToken {
        let token = self.next_token();
        self.latest_detail_token = Some(token);
        self.detail = LoadState::Loading;
        token
    }

    pub fn apply_detail_success(&mut self, token: RequestToken, record: T) -> bool {
        if self.latest_detail_token != Some(token) {
            return false;
        }
        self.detail = LoadState::Loaded(record);
        true
    }

    pub fn apply_detail_failure(&mut self, token: RequestToken, message: String) -> bool {
        if self.latest_detail_token != Some(token) {
            return false;
        }
        self.detail = LoadState::Failed(message);
        true
    }

    // ---- reconciliation after confirmed mutations ----

    /// Adds a freshly created record to the front of the list.
    pub fn reconcile_created(&mut self, record: T) {
        self.collection.insert_front(record);
        self.total = self.total.saturating_add(1);
    }

    /// Patches the updated record into the loaded list (when present) and
    /// into the detail slot (when it is the active detail). No re-fetch.
    pub fn reconcile_updated(&mut self, record: T) {
        if let Some(detail) = self.detail.loaded_mut() {
            if detail.id() == record.id() {
                *detail = record.clone();
            }
        }
        self.collection.patch(record);
    }

    /// Drops a deleted record from the list and clears the detail slot if
    /// the deleted entity was the active detail.
    pub fn reconcile_removed(&mut self, id: Uuid) {
        if self.collection.remove(id).is_some() {
            self.total = self.total.saturating_sub(1);
        }
        if self.detail.loaded().map(|d| d.id()) == Some(id) {
            self.detail = LoadState::Idle;
        }
    }

    // ---- accessors ----

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.collection.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.collection.get(id)
    }

    pub fn detail(&self) -> &LoadState<T> {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> Option<&mut T> {
        self.detail.loaded_mut()
    }

    pub fn list_phase(&self) -> &FetchPhase {
        &self.list_phase
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    fn next_token(&mut self) -> RequestToken {
        self.seq += 1;
        RequestToken(self.seq)
    }
}
