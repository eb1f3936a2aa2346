pub mod aggregate;
pub mod error;
pub mod notification;
pub mod store;

pub use aggregate::{normalize_name, parse_price, ShoppingItem, ShoppingItemDto, ShoppingItemId};
pub use error::ShoppingListError;
pub use notification::{Notification, NotificationIntent};
pub use store::{ShoppingList, ShoppingSummary};
