//! In-memory dashboard storage.
//!
//! Stores dashboards in a `HashMap` behind an `Arc<RwLock<_>>`. Data is lost
//! when the process exits, which is enough for development and tests.

mod repository;

pub use repository::InMemoryDashboardRepository;
