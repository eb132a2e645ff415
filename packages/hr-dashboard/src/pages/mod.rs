//! Screen controllers.
//!
//! Each page owns the state for one screen and talks to the backend only
//! through [`hr_client::HrApi`] and an explicitly passed [`hr_client::Session`].

pub mod history;
pub mod home;
pub mod personal;
pub mod profile;

pub use history::EmployeeHistoryPage;
pub use home::HomePage;
pub use personal::{PersonalPage, Tab};
pub use profile::ProfilePage;
