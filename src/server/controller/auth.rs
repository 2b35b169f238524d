use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            CreateUserDto, ForgotPasswordDto, LoginDto, LoginResponseDto, ResetPasswordDto,
            UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new guest account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid name, email or password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid name, email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .signup(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Returns a bearer token to send as `Authorization: Bearer <token>` on later requests.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Email or password mismatch
#[utoipa::path(
    post,
    path = "/users/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = LoginResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            success: true,
            message: "Logged in".to_string(),
            token,
            is_admin: user.is_admin,
            user: user.into_dto(),
        }),
    ))
}

/// Log out, revoking every token of the caller.
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Tokens revoked", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    AuthService::new(&state.db).logout(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Request a password reset token.
///
/// Always answers 200 so the endpoint cannot be used to probe for accounts.
#[utoipa::path(
    post,
    path = "/users/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset requested", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .forgot_password(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(
            "If the account exists, a password reset token has been issued",
        )),
    ))
}

/// Set a new password using a reset token.
///
/// # Returns
/// - `200 OK` - Password changed, existing sessions revoked
/// - `400 Bad Request` - Token invalid or expired, or password too short
#[utoipa::path(
    post,
    path = "/users/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid or expired token, or invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .reset_password(&payload.email, &payload.token, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password has been reset"))))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
