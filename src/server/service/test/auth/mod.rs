use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
};

mod login;
mod reset_password;
