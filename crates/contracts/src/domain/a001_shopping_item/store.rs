use serde::{Deserialize, Serialize};

use super::aggregate::{ShoppingItem, ShoppingItemDto, ShoppingItemId};
use super::error::ShoppingListError;

/// Сводные показатели списка (вычисляются на лету, не хранятся)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSummary {
    pub item_count: usize,
    pub purchased_count: usize,
    pub total_price: f64,
    pub remaining_price: f64,
}

/// Список покупок текущей сессии.
///
/// Порядок — порядок добавления. Поле `items` закрыто: изменять список можно
/// только через `add_item`, `toggle_purchased` и `delete_item`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Команды
    // ========================================================================

    /// Добавить позицию в конец списка.
    ///
    /// При ошибке валидации список не меняется.
    pub fn add_item(&mut self, dto: &ShoppingItemDto) -> Result<&ShoppingItem, ShoppingListError> {
        let (name, price) = dto.validated()?;
        let item = ShoppingItem::new_for_insert(name, price);
        debug_assert!(self.get(&item.id).is_none(), "duplicate item id");

        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Инвертировать флаг `purchased`. Возвращает новое значение,
    /// `None` если позиции с таким ID нет.
    pub fn toggle_purchased(&mut self, id: &ShoppingItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == *id)?;
        item.purchased = !item.purchased;
        Some(item.purchased)
    }

    /// Удалить позицию. Возвращает удалённую позицию, `None` если её не было.
    pub fn delete_item(&mut self, id: &ShoppingItemId) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(index))
    }

    // ========================================================================
    // Чтение
    // ========================================================================

    pub fn get(&self, id: &ShoppingItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // Производные показатели
    // ========================================================================

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }

    /// Сумма цен всех позиций (купленных и нет)
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Сумма цен ещё не купленных позиций
    pub fn remaining_price(&self) -> f64 {
        self.items
            .iter()
            .filter(|item| !item.purchased)
            .map(|item| item.price)
            .sum()
    }

    pub fn summary(&self) -> ShoppingSummary {
        ShoppingSummary {
            item_count: self.item_count(),
            purchased_count: self.purchased_count(),
            total_price: self.total_price(),
            remaining_price: self.remaining_price(),
        }
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = std::slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn add(list: &mut ShoppingList, name: &str, price: &str) -> ShoppingItemId {
        list.add_item(&ShoppingItemDto::new(name, price)).unwrap().id
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = ShoppingList::new();
        assert!(list.is_empty());
        assert_eq!(list.summary(), ShoppingSummary::default());
    }

    #[test]
    fn test_length_counts_only_successful_adds() {
        let mut list = ShoppingList::new();
        let inputs = ["Milk", "", "Bread", "   ", "Eggs", "\t"];
        let mut successes = 0;
        for name in inputs {
            if list.add_item(&ShoppingItemDto::new(name, "1")).is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 3);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_name_does_not_mutate() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", "1");
        let before = list.clone();

        let result = list.add_item(&ShoppingItemDto::new("   ", "3"));
        assert_eq!(result.unwrap_err(), ShoppingListError::EmptyName);
        assert_eq!(list, before);
    }

    #[test]
    fn test_negative_price_does_not_mutate() {
        let mut list = ShoppingList::new();
        let result = list.add_item(&ShoppingItemDto::new("Milk", "-5"));
        assert_eq!(result.unwrap_err(), ShoppingListError::NegativePrice(-5.0));
        assert!(list.is_empty());
    }

    #[test]
    fn test_added_item_fields() {
        let mut list = ShoppingList::new();
        let item = list
            .add_item(&ShoppingItemDto::new("  Milk  ", "2.50"))
            .unwrap()
            .clone();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.price, 2.5);
        assert!(!item.purchased);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_unparseable_price_is_zero() {
        let mut list = ShoppingList::new();
        let a = add(&mut list, "Milk", "abc");
        let b = add(&mut list, "Bread", "");
        assert_eq!(list.get(&a).unwrap().price, 0.0);
        assert_eq!(list.get(&b).unwrap().price, 0.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = ShoppingList::new();
        for name in ["a", "b", "c", "d"] {
            add(&mut list, name, "1");
        }
        let names: Vec<&str> = list.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_ids_unique() {
        let mut list = ShoppingList::new();
        for _ in 0..100 {
            add(&mut list, "Same", "1");
        }
        let ids: HashSet<_> = list.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_totals_and_toggle() {
        let mut list = ShoppingList::new();
        let first = add(&mut list, "Milk", "2.50");
        add(&mut list, "Bread", "3.00");

        assert_eq!(list.total_price(), 5.5);
        assert_eq!(list.remaining_price(), 5.5);

        assert_eq!(list.toggle_purchased(&first), Some(true));
        assert_eq!(list.total_price(), 5.5);
        assert_eq!(list.remaining_price(), 3.0);
        assert_eq!(list.purchased_count(), 1);
        assert_eq!(list.item_count(), 2);
    }

    #[test]
    fn test_remaining_never_exceeds_total() {
        let mut list = ShoppingList::new();
        let ids: Vec<_> = ["1.25", "0", "7.10", "abc", "99.99"]
            .iter()
            .enumerate()
            .map(|(i, price)| add(&mut list, &format!("item {}", i), price))
            .collect();

        for id in &ids {
            list.toggle_purchased(id);
            let summary = list.summary();
            assert!(summary.remaining_price <= summary.total_price);
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = ShoppingList::new();
        let a = add(&mut list, "Milk", "2");
        let b = add(&mut list, "Bread", "3");
        list.toggle_purchased(&b);
        let before = list.clone();

        list.toggle_purchased(&a);
        list.toggle_purchased(&a);
        assert_eq!(list, before);
    }

    #[test]
    fn test_even_toggles_are_identity() {
        let mut list = ShoppingList::new();
        let id = add(&mut list, "Milk", "2");
        let before = list.clone();
        for _ in 0..6 {
            list.toggle_purchased(&id);
        }
        assert_eq!(list, before);
        list.toggle_purchased(&id);
        assert_ne!(list, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", "2");
        let before = list.clone();
        assert_eq!(list.toggle_purchased(&ShoppingItemId::new_v4()), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_returns_removed_item() {
        let mut list = ShoppingList::new();
        let a = add(&mut list, "Milk", "2");
        let b = add(&mut list, "Bread", "3");
        let c = add(&mut list, "Eggs", "4");

        let removed = list.delete_item(&b).unwrap();
        assert_eq!(removed.name, "Bread");
        let ids: Vec<_> = list.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(list.total_price(), 6.0);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", "2");
        let before = list.clone();
        let summary = list.summary();

        assert!(list.delete_item(&ShoppingItemId::new_v4()).is_none());
        assert_eq!(list, before);
        assert_eq!(list.summary(), summary);
    }

    #[test]
    fn test_delete_twice() {
        let mut list = ShoppingList::new();
        let id = add(&mut list, "Milk", "2");
        assert!(list.delete_item(&id).is_some());
        assert!(list.delete_item(&id).is_none());
        assert!(list.is_empty());
    }
}
