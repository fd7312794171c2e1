//! Dashboard sharing: data types, failures and the service contract.
//!
//! Handlers talk to [`DashboardSharingService`] only. The default service
//! implementation in the server crate enforces [`policy`] on top of a
//! [`DashboardRepository`].

mod error;
mod http_mapping;
pub mod policy;
mod requests;
mod traits;
mod types;

pub use error::{RepositoryError, SharingError};
pub use http_mapping::sharing_error_to_status_code;
pub use requests::SaveSharingConfigRequest;
pub use traits::{DashboardRepository, DashboardSharingService, RepositoryResult, Result};
pub use types::{Dashboard, SharingConfig};
