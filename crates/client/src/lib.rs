//! API access layer of the admin panel.
//!
//! Everything the panel's screens need to talk to the backend lives here:
//! base-URL resolution, the authenticated HTTP client, response-envelope
//! normalization and one `api` module per backend resource. No UI code.

pub mod domain;
pub mod shared;
pub mod system;

pub use shared::api_utils::ApiUrls;
pub use shared::config::Config;
pub use shared::envelope::Normalized;
pub use shared::error::ApiError;
pub use shared::http::{ApiClient, FileField};
pub use system::auth::storage::{
    FileStorage, MemoryStorage, RedirectGuard, SessionStorage, SessionStore,
};
