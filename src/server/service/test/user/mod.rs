use entity::sea_orm_active_enums::ReservationStatus;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{reservation::ReservationRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::UserChanges,
    service::{auth::AuthService, user::UserService},
};

mod delete;
mod update;
