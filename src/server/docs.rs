//! OpenAPI document and Swagger UI.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        menu_item::{CreateMenuItemDto, MenuItemDto, UpdateMenuItemDto},
        order::{
            CreateOrderDto, CreateOrderItemDto, OrderDto, OrderItemDto, OrderStatusDto,
            UpdateOrderStatusDto,
        },
        reservation::{
            CreateReservationDto, CreateReservationResponseDto, PaginatedReservationsDto,
            ReservationDetailDto, ReservationDto, ReservationStatusDto, UpdateReservationDto,
        },
        room::{CreateRoomDto, RoomDto, RoomTypeDto, SearchRoomsDto, UpdateRoomDto},
        stats::{BarStatsDto, RecentOrderDto, TopItemDto},
        user::{
            CreateUserDto, ForgotPasswordDto, LoginDto, LoginResponseDto, PaginatedUsersDto,
            ResetPasswordDto, UpdateUserDto, UserDto,
        },
    },
    server::{controller, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel & Bar API", description = "Room booking and bar ordering backend"),
    paths(
        controller::auth::signup,
        controller::auth::login,
        controller::auth::logout,
        controller::auth::forgot_password,
        controller::auth::reset_password,
        controller::auth::get_user,
        controller::user::get_users,
        controller::user::get_user_by_id,
        controller::user::update_user,
        controller::user::delete_user,
        controller::room::get_rooms,
        controller::room::get_room_by_id,
        controller::room::create_room,
        controller::room::update_room,
        controller::room::delete_room,
        controller::room::search_rooms,
        controller::reservation::create_reservation,
        controller::reservation::get_reservation_by_id,
        controller::reservation::update_reservation,
        controller::reservation::cancel_reservation,
        controller::reservation::get_reservations,
        controller::reservation::get_user_reservations,
        controller::reservation::search_reservations,
        controller::menu_item::get_menu_items,
        controller::menu_item::get_menu_item_by_id,
        controller::menu_item::create_menu_item,
        controller::menu_item::update_menu_item,
        controller::menu_item::delete_menu_item,
        controller::menu_item::get_categories,
        controller::order::get_orders,
        controller::order::create_order,
        controller::order::get_order_by_id,
        controller::order::update_order_status,
        controller::order::delete_order,
        controller::stats::get_bar_stats,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        PaginatedUsersDto,
        CreateUserDto,
        UpdateUserDto,
        LoginDto,
        LoginResponseDto,
        ForgotPasswordDto,
        ResetPasswordDto,
        RoomTypeDto,
        RoomDto,
        CreateRoomDto,
        UpdateRoomDto,
        SearchRoomsDto,
        ReservationStatusDto,
        ReservationDto,
        ReservationDetailDto,
        PaginatedReservationsDto,
        CreateReservationDto,
        CreateReservationResponseDto,
        UpdateReservationDto,
        MenuItemDto,
        CreateMenuItemDto,
        UpdateMenuItemDto,
        OrderStatusDto,
        OrderItemDto,
        OrderDto,
        CreateOrderItemDto,
        CreateOrderDto,
        UpdateOrderStatusDto,
        TopItemDto,
        RecentOrderDto,
        BarStatsDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Swagger UI at `/api/docs`, backed by the document at `/api/docs/openapi.json`.
pub fn swagger() -> Router<AppState> {
    SwaggerUi::new("/api/docs")
        .url("/api/docs/openapi.json", ApiDoc::openapi())
        .into()
}
