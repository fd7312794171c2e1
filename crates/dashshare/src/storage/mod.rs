//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `dashshare_core::sharing`.

pub mod inmemory;

pub use inmemory::InMemoryDashboardRepository;
