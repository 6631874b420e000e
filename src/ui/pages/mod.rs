pub mod admin;
pub mod forms;
pub mod login;
pub mod resident;

pub use admin::AdminDashboard;
pub use login::LoginPage;
pub use resident::ResidentDashboard;
