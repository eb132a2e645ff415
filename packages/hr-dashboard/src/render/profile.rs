use crate::pages::ProfilePage;

pub const SIGNED_OUT_MESSAGE: &str = "No user information found. Please log in again.";
pub const NO_EMAIL: &str = "Not available";
pub const NO_ROLE: &str = "No role assigned";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileView {
    SignedOut,
    Ready {
        full_name: String,
        email: String,
        role: String,
    },
}

pub fn profile_view(page: &ProfilePage) -> ProfileView {
    if !page.is_signed_in() {
        return ProfileView::SignedOut;
    }
    ProfileView::Ready {
        full_name: page.full_name.clone(),
        email: page
            .company_email
            .clone()
            .unwrap_or_else(|| NO_EMAIL.to_string()),
        role: page.role.clone().unwrap_or_else(|| NO_ROLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_client::Session;

    #[test]
    fn test_profile_from_session() {
        let session = Session::default().name("Ada", "Lovelace");
        assert_eq!(
            profile_view(&ProfilePage::from_session(&session)),
            ProfileView::Ready {
                full_name: "Ada Lovelace".into(),
                email: "Not available".into(),
                role: "No role assigned".into(),
            }
        );
    }

    #[test]
    fn test_signed_out() {
        let page = ProfilePage::from_session(&Session::default());
        assert_eq!(profile_view(&page), ProfileView::SignedOut);
    }
}
