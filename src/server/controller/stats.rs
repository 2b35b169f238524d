use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::BarStatsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Bar statistics: today's revenue, this month's order count, best sellers and the
/// latest orders. Day and month are UTC calendar periods.
///
/// # Access Control
/// - `Admin` - Only admins can view statistics
#[utoipa::path(
    get,
    path = "/bar-stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Bar statistics", body = BarStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bar_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
