//! Session-gated header state.

use serde::Serialize;

use super::SessionUser;

/// Local handoff routes to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLinks {
    pub login: String,
    pub register: String,
    pub logout: String,
}

impl Default for AuthLinks {
    fn default() -> Self {
        Self {
            login: "/api/auth/login".to_string(),
            register: "/api/auth/register".to_string(),
            logout: "/api/auth/logout".to_string(),
        }
    }
}

/// Which header the page shows. Exactly one variant applies per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionView {
    SignedOut {
        login_url: String,
        register_url: String,
    },
    SignedIn {
        given_name: String,
        logout_url: String,
    },
}

impl SessionView {
    pub fn select(session: Option<&SessionUser>, links: &AuthLinks) -> Self {
        match session {
            None => Self::SignedOut {
                login_url: links.login.clone(),
                register_url: links.register.clone(),
            },
            Some(user) => Self::SignedIn {
                given_name: user.given_name.clone(),
                logout_url: links.logout.clone(),
            },
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayoub() -> SessionUser {
        SessionUser {
            id: "kp_42".to_string(),
            given_name: "Ayoub".to_string(),
            family_name: None,
            email: "ayoub@example.com".to_string(),
            picture: None,
        }
    }

    #[test]
    fn test_absent_session_selects_signed_out() {
        let view = SessionView::select(None, &AuthLinks::default());

        assert_eq!(
            view,
            SessionView::SignedOut {
                login_url: "/api/auth/login".to_string(),
                register_url: "/api/auth/register".to_string(),
            }
        );
        assert!(!view.is_signed_in());
    }

    #[test]
    fn test_present_session_selects_signed_in() {
        let user = ayoub();
        let view = SessionView::select(Some(&user), &AuthLinks::default());

        assert_eq!(
            view,
            SessionView::SignedIn {
                given_name: "Ayoub".to_string(),
                logout_url: "/api/auth/logout".to_string(),
            }
        );
        assert!(view.is_signed_in());
    }

    #[test]
    fn test_custom_links_are_used() {
        let links = AuthLinks {
            login: "/in".to_string(),
            register: "/up".to_string(),
            logout: "/out".to_string(),
        };

        match SessionView::select(None, &links) {
            SessionView::SignedOut {
                login_url,
                register_url,
            } => {
                assert_eq!(login_url, "/in");
                assert_eq!(register_url, "/up");
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }
}
