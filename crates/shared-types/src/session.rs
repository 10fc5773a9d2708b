/// Local-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local-storage key holding the user's role string.
pub const ROLE_KEY: &str = "role";
/// The role string that unlocks project creation.
pub const SUPER_ADMIN_ROLE: &str = "SUPER_ADMIN";

/// Snapshot of the browser session as read from local storage.
///
/// Both values are written by the external Activus login flow; this
/// application only ever reads them. There is no expiry or refresh logic:
/// presence of a token is the sole gate for calling the API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self { token, role }
    }

    /// Whether a token is present (not whether it is valid — the backend
    /// decides that).
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether any role is stored. Controls sidebar visibility.
    pub fn has_role(&self) -> bool {
        self.role.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Whether the stored role unlocks the create-project affordance.
    /// Exact string match; no role hierarchy exists client-side.
    pub fn is_super_admin(&self) -> bool {
        self.role.as_deref() == Some(SUPER_ADMIN_ROLE)
    }
}
