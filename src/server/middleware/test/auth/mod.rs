use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::access_token::AccessTokenRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    util::security::hash_token,
};

mod require;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Issues a token for the user directly through the repository.
async fn issue_token(db: &sea_orm::DatabaseConnection, user_id: i32, token: &str) {
    AccessTokenRepository::new(db)
        .create(user_id, hash_token(token))
        .await
        .unwrap();
}
