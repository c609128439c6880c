use serde::{Deserialize, Serialize};

/// Signed-in seller identity, written into the session store by the
/// platform and read here at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Public profile attached to a match member. Both fields can be missing
/// for accounts that never finished onboarding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    #[allow(dead_code)] // Used by tests and demo seeding
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            avatar_url: None,
        }
    }
}
