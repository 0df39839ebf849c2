//! Session establishment and authorization policy
//!
//! The legacy app promoted a hard-coded email to super admin as a side effect
//! inside a rendering provider. Here the promotion is an explicit, one-time
//! policy decision made when the session is established; rendering never
//! re-evaluates authorization.

use serde::{Deserialize, Serialize};

/// Authorization level of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member,
    Admin,
    SuperAdmin,
}

/// Profile record fetched from the store at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Established session the UI layer carries for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

/// One-time authorization upgrade rule applied at session establishment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionPolicy {
    super_admin_emails: Vec<String>,
}

impl SessionPolicy {
    /// Build a policy from the deployment's super-admin allow-list.
    #[must_use]
    pub fn new(super_admin_emails: Vec<String>) -> Self {
        Self { super_admin_emails }
    }

    /// Establish a session for a profile, applying the promotion rule once.
    /// Emails match case-insensitively; a promoted role is never downgraded
    /// below what the profile already carries.
    #[must_use]
    pub fn establish(&self, profile: &UserProfile) -> Session {
        let promoted = self
            .super_admin_emails
            .iter()
            .any(|email| email.eq_ignore_ascii_case(&profile.email));
        let role = if promoted {
            Role::SuperAdmin
        } else {
            profile.role
        };
        Session {
            user_id: profile.id.clone(),
            role,
        }
    }
}
