//! Bearer token authorization guard.
//!
//! Controllers build an `AuthGuard` from the request headers and call `require` with the
//! permissions the endpoint needs.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be the given user or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Authenticates the caller and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Token unknown or revoked
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(user) = AuthService::new(self.db).authenticate(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            check(&user, permission)?;
        }

        Ok(user)
    }
}

/// Checks a single permission against an already authenticated user.
///
/// Used when the resource owner is only known after loading the resource.
pub fn check(user: &User, permission: &Permission) -> Result<(), AuthError> {
    match permission {
        Permission::Admin => {
            if !user.is_admin {
                return Err(AuthError::AccessDenied(
                    user.id,
                    "admin permission required".to_string(),
                ));
            }
        }
        Permission::SelfOrAdmin(owner_id) => {
            if !user.is_admin && user.id != *owner_id {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("resource belongs to user {}", owner_id),
                ));
            }
        }
    }

    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
