use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Admin-only partial update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Login result. `token` is only ever returned here; the server keeps a hash of it.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub is_admin: bool,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResetPasswordDto {
    pub email: String,
    pub token: String,
    pub password: String,
}
