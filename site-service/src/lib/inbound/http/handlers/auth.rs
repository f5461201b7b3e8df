use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::service::AuthenticatedUser;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let email = required(body.email, "email")?;
    let password = required(body.password, "password")?;
    let name = required(body.name, "name")?;

    let email = EmailAddress::new(email).map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .auth_service
        .register(RegisterCommand::new(name, email, password))
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| {
            ApiSuccess::with_message(
                StatusCode::CREATED,
                "Registration successful",
                authenticated.into(),
            )
        })
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let email = required(body.email, "email")?;
    let password = required(body.password, "password")?;

    state
        .auth_service
        .login(&email, &password)
        .await
        .map_err(ApiError::from)
        .map(|ref authenticated| ApiSuccess::new(StatusCode::OK, authenticated.into()))
}

/// Returns the identity carried by the presented token. No store lookup:
/// this reflects the claims as issued, not the current user record.
pub async fn me(
    Extension(user): Extension<CurrentUser>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProfileData {
            id: user.id.to_string(),
            email: user.email,
            role: user.role,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponseData {
    pub user: UserData,
    pub token: String,
}

impl From<&AuthenticatedUser> for AuthResponseData {
    fn from(authenticated: &AuthenticatedUser) -> Self {
        Self {
            user: (&authenticated.user).into(),
            token: authenticated.token.clone(),
        }
    }
}

/// User payload as sent to clients. Deliberately has no password field at
/// all, so a hash cannot leak through serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub email: String,
    pub role: Role,
}
