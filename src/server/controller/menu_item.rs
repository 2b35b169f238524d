use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        menu_item::{CreateMenuItemDto, MenuItemDto, UpdateMenuItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu_item::{CreateMenuItemParams, MenuItem, UpdateMenuItemParams},
        service::menu_item::MenuItemService,
        state::AppState,
    },
};

/// Tag for grouping bar menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// List the bar menu ordered by category and name.
#[utoipa::path(
    get,
    path = "/menu-items",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Menu items", body = Vec<MenuItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = MenuItemService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(MenuItem::into_dto).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/menu-items/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item found", body = MenuItemDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu item {} not found", id)))?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Add an item to the bar menu.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
#[utoipa::path(
    post,
    path = "/menu-items",
    tag = MENU_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemDto),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let item = MenuItemService::new(&state.db)
        .create(CreateMenuItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Partially update a menu item. Existing orders keep their prices.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
#[utoipa::path(
    put,
    path = "/menu-items/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemDto),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let item = MenuItemService::new(&state.db)
        .update(UpdateMenuItemParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Remove a menu item that no order references.
///
/// # Access Control
/// - `Admin` - Only admins can edit the menu
#[utoipa::path(
    delete,
    path = "/menu-items/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 409, description = "Menu item is part of existing orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    MenuItemService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Menu item deleted"))))
}

/// List the distinct menu categories.
#[utoipa::path(
    get,
    path = "/categories",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Category names", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = MenuItemService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}
