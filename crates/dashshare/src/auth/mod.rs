//! Bearer-token authentication.
//!
//! The middleware resolves the `Authorization` header into a
//! [`SignedInUser`](dashshare_core::identity::SignedInUser) stored in the
//! request extensions. Requests without a valid token pass through anonymous.

mod authenticator;
mod middleware;

pub use authenticator::{Authenticator, StaticTokenAuthenticator};
pub use middleware::authenticate;
