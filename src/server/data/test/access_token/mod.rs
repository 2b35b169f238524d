use crate::server::data::access_token::AccessTokenRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_for_user;
