//! Credential flows: signup, login, logout and password reset.
//!
//! Bearer and reset tokens are random alphanumeric strings handed to the client once;
//! only their SHA-256 digests are persisted.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::LazyLock;

use crate::server::{
    data::{
        access_token::AccessTokenRepository, password_reset_token::PasswordResetTokenRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    util::security::{generate_token, hash_password, hash_token, verify_password},
};

/// Minutes a password reset token stays valid.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_NAME_LENGTH: usize = 255;

const DUMMY_PASSWORD: &str = "no-account-has-this-password";

/// Argon2 hash checked on logins for unknown emails, so they cost as much as a wrong password.
static DUMMY_PASSWORD_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password(DUMMY_PASSWORD).ok());

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new guest account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account, never an admin
    /// - `Err(AppError::BadRequest)` - Name, email or password failed validation
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        validate_name(name)?;
        let email = normalize_email(email)?;
        validate_password(password)?;

        let repo = UserRepository::new(self.db);
        if repo.email_taken(&email, None).await? {
            return Err(AppError::Conflict(format!("Email {} is already in use", email)));
        }

        let user = repo
            .create(CreateUserParams {
                name: name.trim().to_string(),
                email,
                password_hash: hash_password(password)?,
                is_admin: false,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Plain bearer token and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Email or password mismatch
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let Some(row) = UserRepository::new(self.db).find_by_email(&email).await? else {
            if let Some(dummy) = DUMMY_PASSWORD_HASH.as_deref() {
                verify_password(password, dummy);
            }
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &row.password_hash) {
            tracing::debug!("Rejected login for user {}", row.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = generate_token();
        AccessTokenRepository::new(self.db)
            .create(row.id, hash_token(&token))
            .await?;

        Ok((token, User::from_entity(row)))
    }

    /// Resolves a bearer token to its user.
    pub async fn authenticate(&self, token: &str) -> Result<Option<User>, AppError> {
        Ok(AccessTokenRepository::new(self.db)
            .find_user_by_token_hash(&hash_token(token))
            .await?)
    }

    /// Revokes every bearer token of a user.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        let revoked = AccessTokenRepository::new(self.db)
            .delete_for_user(user_id)
            .await?;

        tracing::debug!("Revoked {} token(s) for user {}", revoked, user_id);

        Ok(())
    }

    /// Issues a password reset token for the account with the given email.
    ///
    /// Unknown emails are not reported to the caller. Token delivery is out of band; the
    /// token is only logged at debug level.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token issued
    /// - `Ok(None)` - No account for that email
    pub async fn forgot_password(&self, email: &str) -> Result<Option<String>, AppError> {
        self.forgot_password_at(email, Utc::now()).await
    }

    pub(crate) async fn forgot_password_at(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, AppError> {
        let email = email.trim().to_lowercase();

        let Some(row) = UserRepository::new(self.db).find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown email {}", email);
            return Ok(None);
        };

        let token = generate_token();
        PasswordResetTokenRepository::new(self.db)
            .create(
                row.id,
                hash_token(&token),
                now + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
            )
            .await?;

        tracing::debug!("Password reset token for user {}: {}", row.id, token);

        Ok(Some(token))
    }

    /// Sets a new password using a reset token, consuming the token.
    ///
    /// All reset and bearer tokens of the user are revoked with the password change.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::BadRequest)` - New password too short
    /// - `Err(AppError::AuthErr(InvalidResetToken))` - Unknown email, wrong or expired token
    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        password: &str,
    ) -> Result<(), AppError> {
        self.reset_password_at(email, token, password, Utc::now())
            .await
    }

    pub(crate) async fn reset_password_at(
        &self,
        email: &str,
        token: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        validate_password(password)?;
        let email = email.trim().to_lowercase();

        let txn = self.db.begin().await?;

        let Some(row) = UserRepository::new(&txn).find_by_email(&email).await? else {
            return Err(AuthError::InvalidResetToken.into());
        };

        let reset_repo = PasswordResetTokenRepository::new(&txn);
        if reset_repo
            .find_valid(row.id, &hash_token(token), now)
            .await?
            .is_none()
        {
            return Err(AuthError::InvalidResetToken.into());
        }

        UserRepository::new(&txn)
            .set_password_hash(row.id, hash_password(password)?)
            .await?;
        reset_repo.delete_for_user(row.id).await?;
        AccessTokenRepository::new(&txn)
            .delete_for_user(row.id)
            .await?;

        txn.commit().await?;

        tracing::info!("Password reset for user {}", row.id);

        Ok(())
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(())
}

/// Trims and lowercases an email, rejecting values without an `@`.
pub(crate) fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::BadRequest(format!("Invalid email address: {}", email)));
    }

    Ok(email)
}

pub(crate) fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
