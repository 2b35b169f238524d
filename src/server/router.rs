use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{forgot_password, get_user, login, logout, reset_password, signup},
        menu_item::{
            create_menu_item, delete_menu_item, get_categories, get_menu_item_by_id,
            get_menu_items, update_menu_item,
        },
        order::{create_order, delete_order, get_order_by_id, get_orders, update_order_status},
        reservation::{
            cancel_reservation, create_reservation, get_reservation_by_id, get_reservations,
            get_user_reservations, search_reservations, update_reservation,
        },
        room::{create_room, delete_room, get_room_by_id, get_rooms, search_rooms, update_room},
        stats::get_bar_stats,
        user::{delete_user, get_user_by_id, get_users, update_user},
    },
    docs,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/users", post(signup).get(get_users))
        .route("/users/login", post(login))
        .route("/users/logout", post(logout))
        .route("/users/forgot-password", post(forgot_password))
        .route("/users/reset-password", post(reset_password))
        .route(
            "/users/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route("/user", get(get_user))
        // Rooms
        .route("/chambre", get(get_rooms).post(create_room))
        .route(
            "/chambre/{id}",
            get(get_room_by_id).put(update_room).delete(delete_room),
        )
        .route("/search_chambres", post(search_rooms))
        // Reservations
        .route("/reservation", post(create_reservation))
        .route(
            "/reservation/{id}",
            get(get_reservation_by_id)
                .put(update_reservation)
                .delete(cancel_reservation),
        )
        .route("/reservations", get(get_reservations))
        .route("/reservations/user/{id}", get(get_user_reservations))
        .route("/search_reservations", get(search_reservations))
        // Bar
        .route("/menu-items", get(get_menu_items).post(create_menu_item))
        .route(
            "/menu-items/{id}",
            get(get_menu_item_by_id)
                .put(update_menu_item)
                .delete(delete_menu_item),
        )
        .route("/categories", get(get_categories))
        .route("/orders", get(get_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order_by_id)
                .put(update_order_status)
                .delete(delete_order),
        )
        .route("/bar-stats", get(get_bar_stats))
        .merge(docs::swagger())
}
