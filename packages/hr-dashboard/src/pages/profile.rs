//! "My Profile": the signed-in user, straight from the session.

use hr_client::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePage {
    pub full_name: String,
    pub company_email: Option<String>,
    pub role: Option<String>,
}

impl ProfilePage {
    pub fn from_session(session: &Session) -> Self {
        let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        Self {
            full_name: session.full_name(),
            company_email: non_blank(&session.company_email),
            role: non_blank(&session.role),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        !self.full_name.is_empty()
    }
}
