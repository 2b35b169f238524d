use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginationParams},
        reservation::{
            CreateReservationDto, CreateReservationResponseDto, PaginatedReservationsDto,
            ReservationDetailDto, ReservationDto, SearchReservationsQuery, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{check, AuthGuard, Permission},
        model::reservation::{
            CreateReservationParams, DateWindow, ReservationSearch, ReservationWithDetails,
            StayDates,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn service(state: &AppState) -> ReservationService<'_> {
    ReservationService::new(&state.db, state.payment.as_ref(), &state.room_locks)
}

/// Book a room and open a hosted payment.
///
/// The stay is priced at the room's nightly rate times the number of nights. On success
/// the room is marked unavailable and the response carries the payment page URL.
///
/// # Access Control
/// - `SelfOrAdmin` - Users book for themselves, admins may book for anyone
///
/// # Returns
/// - `201 Created` - Reservation confirmed, redirect to payment
/// - `400 Bad Request` - Malformed dates or departure not after arrival
/// - `404 Not Found` - User or room does not exist
/// - `409 Conflict` - Room unavailable or dates overlap another booking
/// - `500 Internal Server Error` - Payment gateway failure
#[utoipa::path(
    post,
    path = "/reservation",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = CreateReservationResponseDto),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Booking for another user without admin rights", body = ErrorDto),
        (status = 404, description = "User or room not found", body = ErrorDto),
        (status = 409, description = "Room unavailable or dates conflict", body = ErrorDto),
        (status = 500, description = "Payment or internal failure", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::SelfOrAdmin(payload.user_id)])
        .await?;

    let stay = StayDates::parse(&payload.date_arrive, &payload.date_depart)?;

    let outcome = service(&state)
        .create(CreateReservationParams {
            user_id: payload.user_id,
            room_id: payload.chambre_id,
            stay,
            phone_number: payload.phone_number,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponseDto {
            success: true,
            redirect_url: outcome.redirect_url,
            total_amount: outcome.total_amount,
            reservation: outcome.reservation.into_dto(),
        }),
    ))
}

/// Get a single reservation.
///
/// # Access Control
/// - `SelfOrAdmin` - Owner of the reservation or an admin
#[utoipa::path(
    get,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservation = service(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

    check(&user, &Permission::SelfOrAdmin(reservation.user_id))?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Move a reservation to new dates.
///
/// The new stay is checked against the room's other bookings.
///
/// # Access Control
/// - `Admin` - Only admins can reschedule
#[utoipa::path(
    put,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation rescheduled", body = ReservationDto),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Dates conflict or reservation cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stay = StayDates::parse(&payload.date_arrive, &payload.date_depart)?;
    let reservation = service(&state).update_dates(id, stay).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel a reservation and release its room.
///
/// # Access Control
/// - `SelfOrAdmin` - Owner of the reservation or an admin
#[utoipa::path(
    delete,
    path = "/reservation/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let reservations = service(&state);
    let reservation = reservations
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

    check(&user, &Permission::SelfOrAdmin(reservation.user_id))?;

    reservations.cancel(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Reservation cancelled"))))
}

/// Get paginated reservations with their room and user.
///
/// # Access Control
/// - `Admin` - Only admins can list every reservation
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of reservations", body = PaginatedReservationsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = service(&state)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get every reservation of a user.
///
/// # Access Control
/// - `SelfOrAdmin` - Users see their own reservations, admins see anyone's
#[utoipa::path(
    get,
    path = "/reservations/user/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Reservations of the user", body = Vec<ReservationDetailDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is neither the user nor an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let reservations = service(&state).get_by_user(id).await?;

    Ok((StatusCode::OK, Json(into_detail_dtos(reservations))))
}

/// Search reservations by date window and/or user.
///
/// `start_date` and `end_date` must be given together and are both inclusive, so a single
/// day is searched with `start_date == end_date`. A reservation matches when the guest
/// stays on at least one night inside the window.
///
/// # Access Control
/// - `Admin` - Only admins can search reservations
#[utoipa::path(
    get,
    path = "/search_reservations",
    tag = RESERVATION_TAG,
    params(
        ("start_date" = Option<String>, Query, description = "First day of the window, YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "Last day of the window, inclusive, YYYY-MM-DD"),
        ("user_id" = Option<i32>, Query, description = "Only reservations of this user")
    ),
    responses(
        (status = 200, description = "Matching reservations", body = Vec<ReservationDetailDto>),
        (status = 400, description = "Invalid or incomplete date window", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchReservationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let window = match (&query.start_date, &query.end_date) {
        (Some(start), Some(end)) => Some(DateWindow::parse(start, end)?),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "start_date and end_date must be provided together".to_string(),
            ))
        }
    };

    let reservations = service(&state)
        .search(ReservationSearch {
            window,
            user_id: query.user_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(into_detail_dtos(reservations))))
}

fn into_detail_dtos(reservations: Vec<ReservationWithDetails>) -> Vec<ReservationDetailDto> {
    reservations
        .into_iter()
        .map(ReservationWithDetails::into_dto)
        .collect()
}
