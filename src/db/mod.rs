pub mod connection;
pub mod job_repository;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod repository;

pub use job_repository::PgJobRepository;
pub use memory::MemoryJobRepository;
pub use repository::JobRepository;
