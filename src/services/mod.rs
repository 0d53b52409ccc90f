// Service exports
pub mod cache;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use cache::CachedCustomerRepository;
pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;
pub use repository::{CampaignRepository, CustomerRepository, RepositoryError, TargetingLocationRepository};
