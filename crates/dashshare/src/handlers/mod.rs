pub mod error;
pub mod health;
pub mod sharing;

pub use error::ApiError;
