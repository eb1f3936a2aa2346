use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::ShoppingListError;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор позиции списка покупок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShoppingItemId(pub Uuid);

impl ShoppingItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ShoppingItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ShoppingItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl fmt::Display for ShoppingItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Позиция списка покупок
///
/// Создаётся только через [`ShoppingList::add_item`](super::ShoppingList::add_item),
/// поэтому инварианты (непустое имя, неотрицательная цена) выполняются всегда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub price: f64,
    pub purchased: bool,
}

impl ShoppingItem {
    /// Создать новую позицию со свежим ID (ещё не куплена)
    pub(crate) fn new_for_insert(name: String, price: f64) -> Self {
        Self {
            id: ShoppingItemId::new_v4(),
            name,
            price,
            purchased: false,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Проверка инвариантов
    pub fn validate(&self) -> Result<(), ShoppingListError> {
        if self.name.trim().is_empty() || self.name.trim() != self.name {
            return Err(ShoppingListError::EmptyName);
        }
        if self.price < 0.0 {
            return Err(ShoppingListError::NegativePrice(self.price));
        }
        Ok(())
    }
}

// ============================================================================
// Form DTO
// ============================================================================

/// Сырые значения полей формы добавления (как их ввёл пользователь)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItemDto {
    pub name: String,
    pub price: String,
}

impl ShoppingItemDto {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Сбросить оба поля формы
    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
    }

    /// Нормализовать ввод: имя проверяется первым, затем цена
    pub fn validated(&self) -> Result<(String, f64), ShoppingListError> {
        let name = normalize_name(&self.name)?;
        let price = parse_price(&self.price)?;
        Ok((name, price))
    }
}

/// Обрезать пробелы по краям; пустое имя — ошибка
pub fn normalize_name(input: &str) -> Result<String, ShoppingListError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ShoppingListError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Разобрать цену из поля ввода.
///
/// Пустая строка, мусор, `NaN` и бесконечность дают `0`.
/// Отрицательное число — ошибка, `-0` превращается в `0`.
pub fn parse_price(input: &str) -> Result<f64, ShoppingListError> {
    let value = match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Ok(0.0),
    };

    if value < 0.0 {
        return Err(ShoppingListError::NegativePrice(value));
    }

    // -0.0 == 0.0, но печатается как "-0.00"
    Ok(if value == 0.0 { 0.0 } else { value })
}
