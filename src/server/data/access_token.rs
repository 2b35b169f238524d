//! Bearer token storage.
//!
//! Tokens are stored as SHA-256 hashes; the plain token is only known to the client.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::User;

pub struct AccessTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the hash of a newly issued token for a user.
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
    ) -> Result<entity::access_token::Model, DbErr> {
        entity::access_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Resolves a token hash to the user it was issued to.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is known and its user still exists
    /// - `Ok(None)` - Unknown token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::AccessToken::find()
            .filter(entity::access_token::Column::TokenHash.eq(token_hash))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }

    /// Revokes every token of a user, returning how many were removed.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
