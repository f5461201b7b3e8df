use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Identity reconstructed from a validated bearer token, attached to the
/// request extensions for the lifetime of that request.
///
/// Built from claims alone; the credential store is never consulted here, so
/// a role change takes effect only once the user obtains a new token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

/// Authenticator middleware: bearer token in, request identity out.
///
/// Fails closed with one uniform 401 body for every failure reason - missing
/// header, malformed header, bad signature, or undecodable claims - so the
/// response never reveals why a token was rejected.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req).ok_or_else(unauthorized)?;

    let claims: auth::Claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    let identity = identity_from_claims(&claims).ok_or_else(|| {
        tracing::warn!("Token decoded but claims did not form a valid identity");
        unauthorized()
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Role gate: requires an admin identity attached by `authenticate`.
///
/// Runs after the authenticator by construction; if no identity is attached
/// (a wiring defect), it still fails closed with 403 rather than panic.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    check_role(&req, Role::Admin)?;
    Ok(next.run(req).await)
}

/// The single role-gate implementation every gated route goes through.
fn check_role(req: &Request, required: Role) -> Result<(), ApiError> {
    match req.extensions().get::<CurrentUser>() {
        Some(user) if user.role == required => Ok(()),
        Some(user) => {
            tracing::warn!(user_id = %user.id, required = %required, "Access denied");
            Err(forbidden())
        }
        None => {
            tracing::error!("Role gate reached without an authenticated identity");
            Err(forbidden())
        }
    }
}

fn identity_from_claims(claims: &auth::Claims) -> Option<CurrentUser> {
    let id = UserId::from_string(&claims.sub).ok()?;
    let role = claims.role.parse::<Role>().ok()?;
    Some(CurrentUser {
        id,
        email: claims.email.clone(),
        role,
    })
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(http::header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ")
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Authentication required".to_string())
}

fn forbidden() -> ApiError {
    ApiError::Forbidden("Access denied. Admin only.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_claims() {
        let id = UserId::new();
        let claims = auth::Claims::new(id, "a@b.com", "admin");
        let identity = identity_from_claims(&claims).expect("identity");
        assert_eq!(identity.id, id);
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_identity_rejects_bad_sub_and_role() {
        assert!(identity_from_claims(&auth::Claims::new("not-a-uuid", "a@b.com", "user")).is_none());
        assert!(identity_from_claims(&auth::Claims::new(UserId::new(), "a@b.com", "root")).is_none());
    }
}
