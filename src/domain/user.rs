//! User Entity
//!
//! The authenticated user, or rather what passes for one: the login form
//! synthesizes a profile from the entered email, no credential check.

use serde::{Deserialize, Serialize};

/// Current session user. At most one instance is live at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub avatar: String,
}

impl User {
    /// Synthesize a profile from an email address: the name is the
    /// capitalized local part, the avatar a generated placeholder image.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let local = email.split('@').next().unwrap_or_default();
        let mut chars = local.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        let avatar = format!(
            "https://ui-avatars.com/api/?name={}&background=6366f1&color=fff",
            local
        );
        Self { email, name, avatar }
    }
}
