use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the identity provider.
///
/// Never persisted by this application; it travels inside the signed
/// session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-issued user id (opaque, not a UUID).
    pub id: String,
    pub given_name: String,
    #[serde(default)]
    pub family_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
}

impl SessionUser {
    /// Full name used when the user authors a post.
    pub fn display_name(&self) -> String {
        match self.family_name.as_deref().map(str::trim) {
            Some(family) if !family.is_empty() => format!("{} {}", self.given_name, family),
            _ => self.given_name.clone(),
        }
    }
}
