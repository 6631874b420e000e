pub mod identity;
pub mod queries;
pub mod repo;
pub mod schema;

pub use identity::SqliteIdentity;
pub use repo::SqliteRepo;
