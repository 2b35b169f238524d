use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::stats::StatsService};

mod get_at;
