//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need foreign keys take the referenced IDs
//! explicitly; `helpers` offers shortcuts that create the dependencies as well.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let room = factory::room::RoomFactory::new(&db)
//!     .room_number(101)
//!     .nightly_price(10_000)
//!     .available(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `room` - Create room entities
//! - `reservation` - Create reservation entities
//! - `menu_item` - Create menu item entities
//! - `order` - Create orders with their line items
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use menu_item::create_menu_item;
pub use order::create_order;
pub use reservation::create_reservation;
pub use room::create_room;
pub use user::create_user;
