//! User service for business logic.
//!
//! This module provides the `UserService` for account management: listing, lookups,
//! admin updates and deletion guarded by active reservations. Signup and credential
//! flows live in `AuthService`.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        access_token::AccessTokenRepository, password_reset_token::PasswordResetTokenRepository,
        reservation::ReservationRepository, user::UserRepository,
    },
    error::AppError,
    model::user::{PaginatedUsers, UpdateUserParams, User, UserChanges},
    service::auth::{normalize_email, validate_name, validate_password},
    util::security::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Applies an admin edit to an account.
    ///
    /// Names and emails are normalized the way signup does it. A password change revokes
    /// every bearer and reset token of the account, like a password reset.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - A provided field failed validation
    /// - `Err(AppError::Conflict)` - New email already belongs to another account
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User, AppError> {
        let name = match changes.name {
            Some(name) => {
                validate_name(&name)?;
                Some(name.trim().to_string())
            }
            None => None,
        };

        let email = match changes.email {
            Some(email) => {
                let email = normalize_email(&email)?;
                if UserRepository::new(self.db)
                    .email_taken(&email, Some(id))
                    .await?
                {
                    return Err(AppError::Conflict(format!("Email {} is already in use", email)));
                }
                Some(email)
            }
            None => None,
        };

        let password_hash = match changes.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };
        let password_changed = password_hash.is_some();

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update(UpdateUserParams {
                id,
                name,
                email,
                password_hash,
                is_admin: changes.is_admin,
            })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        if password_changed {
            let revoked = AccessTokenRepository::new(&txn).delete_for_user(id).await?;
            PasswordResetTokenRepository::new(&txn)
                .delete_for_user(id)
                .await?;

            tracing::info!("Password of user {} changed, {} token(s) revoked", id, revoked);
        }

        txn.commit().await?;

        Ok(user)
    }

    /// Deletes an account together with its tokens and cancelled reservations.
    ///
    /// # Returns
    /// - `Ok(())` - User removed
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - User still holds pending or confirmed reservations
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let active = ReservationRepository::new(&txn)
            .count_active_for_user(id)
            .await?;
        if active > 0 {
            return Err(AppError::Conflict(format!(
                "User {} still has {} active reservation(s)",
                id, active
            )));
        }

        AccessTokenRepository::new(&txn).delete_for_user(id).await?;
        PasswordResetTokenRepository::new(&txn)
            .delete_for_user(id)
            .await?;
        ReservationRepository::new(&txn).delete_for_user(id).await?;

        if !UserRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
