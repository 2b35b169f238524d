use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{status_from_dto, CreateOrderParams, Order},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping bar order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List all orders, newest first, with their items.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders with items", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let orders = OrderService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(Order::into_dto).collect::<Vec<_>>()),
    ))
}

/// Place a bar order for a room.
///
/// Unit prices are copied from the menu and the total is computed server-side.
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid order or unknown menu item", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .create(CreateOrderParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Set the status of an order. Any status may follow any other.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .update_status(id, status_from_dto(payload.status))
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order and its items.
///
/// # Access Control
/// - `Admin` - Only admins can delete orders
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    OrderService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Order deleted"))))
}
