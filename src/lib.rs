//! grc-console - console client for a compliance-management API
//!
//! This library provides a typed client and an explicit state layer for
//! browsing and managing compliance frameworks, policies, findings,
//! incidents and training programs, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Entity models and pure domain services
//! - **Application Layer** (`application`): The state store, DTOs and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use grc_console::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let client = RestClient::new("http://localhost:8000")?;
//! let mut store = AppStore::new();
//!
//! // Fetch the first page of policies into the store.
//! refresh_list(&mut store.policies, |query| async move {
//!     client.list_policies(&query).await
//! })
//! .await?;
//!
//! for policy in store.policies.items() {
//!     println!("{} ({})", policy.title, policy.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::FileSessionStore;
    pub use crate::adapters::outbound::network::RestClient;
    pub use crate::application::dto::{ListFilters, ListQuery, Page};
    pub use crate::application::store::{AppStore, CollectionSlice, LoadState};
    pub use crate::application::use_cases::browse::{refresh_detail, refresh_list};
    pub use crate::application::use_cases::mutate::{create_entity, delete_entity, update_entity};
    pub use crate::ports::outbound::{
        AuthApi, FindingApi, FrameworkApi, IncidentApi, PolicyApi, SessionStore, TrainingApi,
    };
    pub use crate::shared::{ApiError, Result};
}
