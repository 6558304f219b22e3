//! Client-side state layer.
//!
//! One slice per domain entity family, each exclusively owning its
//! collection. The store is passed around as an explicit `&mut` handle;
//! there is no ambient global state. Single-writer discipline falls out
//! of Rust's borrow rules.

pub mod auth;
pub mod collection;
pub mod load_state;
pub mod notifications;
pub mod slice;

pub use auth::AuthSlice;
pub use collection::IndexedCollection;
pub use load_state::LoadState;
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use slice::{CollectionSlice, FetchPhase, RequestToken};

use crate::compliance::domain::{Finding, Framework, Incident, Policy, TrainingCourse};

/// The whole client state, owned by the running command.
#[derive(Debug, Default)]
pub struct AppStore {
    pub auth: AuthSlice,
    pub frameworks: CollectionSlice<Framework>,
    pub policies: CollectionSlice<Policy>,
    pub findings: CollectionSlice<Finding>,
    pub incidents: CollectionSlice<Incident>,
    pub training: CollectionSlice<TrainingCourse>,
    pub notifications: NotificationQueue,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }
}
