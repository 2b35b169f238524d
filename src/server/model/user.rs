//! User domain models and parameters.
//!
//! Provides the domain model for hotel guests and staff accounts together with the
//! parameter types used when creating and updating them.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UpdateUserDto, UserDto};

/// Account with login identity and admin flag. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Full name, also used as the payer name for reservations.
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Partial account update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
}

/// Admin edit of an account. `password` is plain text and is hashed before storage.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserChanges {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            is_admin: dto.is_admin,
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
