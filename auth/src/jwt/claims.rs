use serde::Deserialize;
use serde::Serialize;

/// Identity claims embedded in a bearer token.
///
/// Carries exactly the fields needed to reconstruct a request identity:
/// subject id, email, and role. There is deliberately no `exp` or `iat`
/// claim, so a token is a deterministic function of these fields and the
/// signing secret, and stays valid until the secret is rotated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address at issuance time
    pub email: String,

    /// Role at issuance time ("user" or "admin")
    pub role: String,
}

impl Claims {
    /// Create claims for a user identity.
    ///
    /// # Arguments
    /// * `sub` - Unique user identifier
    /// * `email` - User email address
    /// * `role` - Role name
    pub fn new(sub: impl ToString, email: impl ToString, role: impl ToString) -> Self {
        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    /// Check whether the claims carry the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
