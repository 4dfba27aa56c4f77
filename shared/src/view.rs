use crate::config::ProfileSettings;
use crate::services::Page;
use crate::types::{Control, Session};
use crate::utils::resolve_profile_pic;

/// Reflects the session on the page. Never touches the session itself.
pub fn bind_session(page: &dyn Page, session: Option<&Session>, profile: &ProfileSettings) {
    match session {
        Some(session) => {
            let pic = resolve_profile_pic(session.photo_url.as_deref(), &profile.placeholder, profile.size);
            page.set_user_pic(&pic);
            page.set_user_name(session.display_name.as_deref().unwrap_or_default());

            page.set_visible(Control::UserName, true);
            page.set_visible(Control::UserPic, true);
            page.set_visible(Control::SignOut, true);
            page.set_visible(Control::SignIn, false);
        }
        None => {
            page.set_visible(Control::UserName, false);
            page.set_visible(Control::UserPic, false);
            page.set_visible(Control::SignIn, true);
            page.set_visible(Control::SignOut, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::testing::{session, RecordingPage};

    use super::*;

    #[test]
    fn signed_in_shows_profile_and_sign_out() {
        let page = RecordingPage::default();
        bind_session(&page, None, &ProfileSettings::default());
        bind_session(&page, Some(&session("u1")), &ProfileSettings::default());

        assert_eq!(page.visible(), BTreeSet::from([Control::UserName, Control::UserPic, Control::SignOut]));
        assert_eq!(page.user_name.borrow().as_str(), "User u1");
        assert_eq!(page.user_pic.borrow().as_str(), "https://lh3.googleusercontent.com/u1?sz=150");
    }

    #[test]
    fn signed_out_shows_only_sign_in() {
        let page = RecordingPage::default();
        bind_session(&page, Some(&session("u1")), &ProfileSettings::default());
        bind_session(&page, None, &ProfileSettings::default());

        assert_eq!(page.visible(), BTreeSet::from([Control::SignIn]));
    }

    #[test]
    fn missing_photo_uses_configured_placeholder() {
        let page = RecordingPage::default();
        let profile = ProfileSettings { placeholder: "/img/anon.png".to_string(), size: 64 };
        let session = Session { uid: "u2".to_string(), display_name: None, photo_url: None };

        bind_session(&page, Some(&session), &profile);

        assert_eq!(page.user_pic.borrow().as_str(), "/img/anon.png");
        assert_eq!(page.user_name.borrow().as_str(), "");
    }
}
