//! Password reset token storage.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct PasswordResetTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PasswordResetTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the hash of a reset token valid until `expires_at`.
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an unexpired token for the user matching the given hash.
    pub async fn find_valid(
        &self,
        user_id: i32,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::password_reset_token::Model>, DbErr> {
        entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::UserId.eq(user_id))
            .filter(entity::password_reset_token::Column::TokenHash.eq(token_hash))
            .filter(entity::password_reset_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Removes every reset token of a user.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordResetToken::delete_many()
            .filter(entity::password_reset_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
