pub use super::access_token::Entity as AccessToken;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::password_reset_token::Entity as PasswordResetToken;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
