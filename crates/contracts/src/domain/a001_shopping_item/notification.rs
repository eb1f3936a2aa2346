use serde::{Deserialize, Serialize};

use super::aggregate::ShoppingItem;
use super::error::ShoppingListError;

/// Характер уведомления (определяет цвет тоста)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationIntent {
    Success,
    Info,
    Error,
}

/// Содержимое уведомления для пользователя.
///
/// Список только формирует текст; показ и скрытие — забота UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub intent: NotificationIntent,
}

impl Notification {
    pub fn item_added(item: &ShoppingItem) -> Self {
        Self {
            title: "Item added".to_string(),
            description: format!("{} added to your shopping list", item.name),
            intent: NotificationIntent::Success,
        }
    }

    pub fn item_removed(item: &ShoppingItem) -> Self {
        Self {
            title: "Item removed".to_string(),
            description: format!("{} removed from your list", item.name),
            intent: NotificationIntent::Info,
        }
    }
}

impl From<&ShoppingListError> for Notification {
    fn from(err: &ShoppingListError) -> Self {
        Self {
            title: err.title().to_string(),
            description: err.to_string(),
            intent: NotificationIntent::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_and_removed_texts() {
        let item = ShoppingItem::new_for_insert("Milk".into(), 2.0);

        let added = Notification::item_added(&item);
        assert_eq!(added.title, "Item added");
        assert_eq!(added.description, "Milk added to your shopping list");
        assert_eq!(added.intent, NotificationIntent::Success);

        let removed = Notification::item_removed(&item);
        assert_eq!(removed.title, "Item removed");
        assert_eq!(removed.description, "Milk removed from your list");
    }

    #[test]
    fn test_from_validation_error() {
        let n = Notification::from(&ShoppingListError::EmptyName);
        assert_eq!(n.title, "Item name required");
        assert_eq!(n.description, "Please enter an item name");
        assert_eq!(n.intent, NotificationIntent::Error);
    }
}
