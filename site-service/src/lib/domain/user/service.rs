use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;

use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Registration and login flows composing the password hasher, the token
/// codec, and the credential store.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    authenticator: Arc<Authenticator>,
}

/// A user together with the bearer token issued for them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthService {
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - Credential store implementation
    /// * `authenticator` - Password and token primitives, already holding the
    ///   signing secret
    pub fn new(users: Arc<dyn UserRepository>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            authenticator,
        }
    }

    /// Register a new user and issue their first token.
    ///
    /// The role is always `user`; the returned token embeds the freshly
    /// persisted identity.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `Database` - Store operation failed
    pub async fn register(&self, command: RegisterCommand) -> Result<AuthenticatedUser, UserError> {
        if self
            .users
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = User::new(command.name, command.email, password_hash);

        // The unique index still arbitrates concurrent registrations; the
        // lookup above only makes the common case a clean 409.
        let user = self.users.create(user).await?;

        let token = self
            .authenticator
            .generate_token(&Self::claims_for(&user))
            .map_err(|e| UserError::Token(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthenticatedUser { user, token })
    }

    /// Verify credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, uniformly
    /// * `Database` - Store operation failed
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, UserError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &Self::claims_for(&user))
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => UserError::Password(err.to_string()),
                auth::AuthenticationError::JwtError(err) => UserError::Token(err.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedUser {
            user,
            token: result.access_token,
        })
    }

    fn claims_for(user: &User) -> Claims {
        Claims::new(user.id, user.email.as_str(), user.role)
    }
}
