pub mod account;
pub mod credential;
pub mod feedback;
pub mod form_file;
pub mod incident;
pub mod record;
pub mod session;
