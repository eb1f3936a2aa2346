use thiserror::Error;

/// Ошибки валидации при добавлении позиции в список покупок.
///
/// Все ошибки восстановимые: добавление отменяется, список не меняется.
/// `Display` даёт текст описания для уведомления, `title()` — заголовок.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShoppingListError {
    #[error("Please enter an item name")]
    EmptyName,

    #[error("Price must be zero or more (got {0})")]
    NegativePrice(f64),
}

impl ShoppingListError {
    /// Короткий заголовок для уведомления
    pub fn title(&self) -> &'static str {
        match self {
            ShoppingListError::EmptyName => "Item name required",
            ShoppingListError::NegativePrice(_) => "Invalid price",
        }
    }
}
