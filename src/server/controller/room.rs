use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{CreateRoomDto, RoomDto, SearchRoomsDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            reservation::StayDates,
            room::{CreateRoomParams, Room, UpdateRoomParams},
        },
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List all rooms ordered by room number.
#[utoipa::path(
    get,
    path = "/chambre",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db, &state.room_locks)
        .get_all()
        .await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(Room::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a single room.
#[utoipa::path(
    get,
    path = "/chambre/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room found", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db, &state.room_locks)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Create a room.
///
/// # Access Control
/// - `Admin` - Only admins can create rooms
#[utoipa::path(
    post,
    path = "/chambre",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room number or price", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db, &state.room_locks)
        .create(CreateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Partially update a room.
///
/// # Access Control
/// - `Admin` - Only admins can edit rooms
#[utoipa::path(
    put,
    path = "/chambre/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Invalid room number or price", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db, &state.room_locks)
        .update(UpdateRoomParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Delete a room.
///
/// Refused while the room has pending or confirmed reservations.
///
/// # Access Control
/// - `Admin` - Only admins can delete rooms
#[utoipa::path(
    delete,
    path = "/chambre/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room has active reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db, &state.room_locks)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Room deleted"))))
}

/// Find rooms free for a stay.
///
/// A room qualifies when its availability flag is set and no pending or confirmed
/// reservation overlaps `[date_arrive, date_depart)`.
#[utoipa::path(
    post,
    path = "/search_chambres",
    tag = ROOM_TAG,
    request_body = SearchRoomsDto,
    responses(
        (status = 200, description = "Rooms free for the stay", body = Vec<RoomDto>),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Json(payload): Json<SearchRoomsDto>,
) -> Result<impl IntoResponse, AppError> {
    let stay = StayDates::parse(&payload.date_arrive, &payload.date_depart)?;

    let rooms = RoomService::new(&state.db, &state.room_locks)
        .search_available(&stay)
        .await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(Room::into_dto).collect::<Vec<_>>()),
    ))
}
