//! Caller identity as seen by request handlers.

mod types;

pub use types::{OrgRole, SignedInUser};
