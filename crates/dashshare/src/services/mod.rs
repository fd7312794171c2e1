pub mod sharing;

pub use sharing::RepositorySharingService;
