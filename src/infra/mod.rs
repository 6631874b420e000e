pub mod blob;
pub mod export;
pub mod sqlite;
