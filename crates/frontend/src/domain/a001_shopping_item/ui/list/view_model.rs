use contracts::domain::a001_shopping_item::{
    Notification, ShoppingItemDto, ShoppingItemId, ShoppingList, ShoppingSummary,
};
use leptos::prelude::*;

/// ViewModel for the shopping list page.
///
/// Owns the session's [`ShoppingList`]; the commands below are the only code
/// that writes to it. Commands return the notification to show instead of
/// showing it, so they work without a toaster.
#[derive(Clone, Copy)]
pub struct ShoppingListViewModel {
    pub list: RwSignal<ShoppingList>,
    pub form: RwSignal<ShoppingItemDto>,
    pub summary: Memo<ShoppingSummary>,
}

impl ShoppingListViewModel {
    pub fn new() -> Self {
        let list = RwSignal::new(ShoppingList::new());
        let summary = Memo::new(move |_| list.with(|l| l.summary()));

        Self {
            list,
            form: RwSignal::new(ShoppingItemDto::default()),
            summary,
        }
    }

    pub fn set_name(&self, name: String) {
        self.form.update(|f| f.name = name);
    }

    pub fn set_price(&self, price: String) {
        self.form.update(|f| f.price = price);
    }

    pub fn is_empty(&self) -> bool {
        self.list.with(|l| l.is_empty())
    }

    /// Add the item from the form. On success the form is cleared.
    ///
    /// Returns `None` only if the page is already disposed.
    pub fn add_command(&self) -> Option<Notification> {
        let dto = self.form.get_untracked();

        let outcome = self
            .list
            .try_update(|list| list.add_item(&dto).map(|item| item.clone()))?;

        match outcome {
            Ok(item) => {
                log::debug!(
                    "shopping item added: {}",
                    serde_json::to_string(&item).unwrap_or_else(|_| item.to_string_id())
                );
                self.form.update(|f| f.clear());
                Some(Notification::item_added(&item))
            }
            Err(err) => {
                log::warn!("shopping item rejected: {:?} (input {:?})", err, dto);
                Some(Notification::from(&err))
            }
        }
    }

    /// Flip `purchased`. Unknown ids are ignored; no notification either way.
    pub fn toggle_command(&self, id: ShoppingItemId) -> Option<bool> {
        let purchased = self
            .list
            .try_update(|list| list.toggle_purchased(&id))
            .flatten();

        match purchased {
            Some(flag) => log::debug!("shopping item {} purchased={}", id, flag),
            None => log::debug!("toggle ignored, no item {}", id),
        }
        purchased
    }

    /// Remove the item; a notification is returned only if it existed.
    pub fn delete_command(&self, id: ShoppingItemId) -> Option<Notification> {
        let removed = self
            .list
            .try_update(|list| list.delete_item(&id))
            .flatten();

        match removed {
            Some(item) => {
                log::debug!("shopping item removed: {} ({})", item.name, id);
                Some(Notification::item_removed(&item))
            }
            None => {
                log::debug!("delete ignored, no item {}", id);
                None
            }
        }
    }
}

impl Default for ShoppingListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_shopping_item::NotificationIntent;

    fn with_vm(test: impl FnOnce(ShoppingListViewModel)) {
        let owner = Owner::new();
        owner.with(|| test(ShoppingListViewModel::new()));
    }

    fn add(vm: &ShoppingListViewModel, name: &str, price: &str) -> Notification {
        vm.set_name(name.to_string());
        vm.set_price(price.to_string());
        vm.add_command().unwrap()
    }

    #[test]
    fn test_add_clears_form_and_notifies() {
        with_vm(|vm| {
            let n = add(&vm, "  Milk  ", "2.50");
            assert_eq!(n.title, "Item added");
            assert_eq!(n.description, "Milk added to your shopping list");
            assert_eq!(vm.form.get_untracked(), ShoppingItemDto::default());
            assert_eq!(vm.list.with_untracked(|l| l.len()), 1);
        });
    }

    #[test]
    fn test_rejected_add_keeps_form() {
        with_vm(|vm| {
            let n = add(&vm, "   ", "4");
            assert_eq!(n.title, "Item name required");
            assert_eq!(n.intent, NotificationIntent::Error);
            assert_eq!(vm.form.get_untracked().price, "4");
            assert!(vm.list.with_untracked(|l| l.is_empty()));
        });
    }

    #[test]
    fn test_summary_follows_commands() {
        with_vm(|vm| {
            add(&vm, "Milk", "2.50");
            add(&vm, "Bread", "3.00");
            let first = vm.list.with_untracked(|l| l.items()[0].id);

            let summary = vm.summary.get_untracked();
            assert_eq!(summary.item_count, 2);
            assert_eq!(summary.total_price, 5.5);
            assert_eq!(summary.remaining_price, 5.5);

            assert_eq!(vm.toggle_command(first), Some(true));
            let summary = vm.summary.get_untracked();
            assert_eq!(summary.total_price, 5.5);
            assert_eq!(summary.remaining_price, 3.0);
        });
    }

    #[test]
    fn test_delete_unknown_id_has_no_notification() {
        with_vm(|vm| {
            add(&vm, "Milk", "1");
            assert!(vm.delete_command(ShoppingItemId::new_v4()).is_none());
            assert_eq!(vm.toggle_command(ShoppingItemId::new_v4()), None);
            assert_eq!(vm.list.with_untracked(|l| l.len()), 1);
        });
    }

    #[test]
    fn test_delete_existing_notifies() {
        with_vm(|vm| {
            add(&vm, "Milk", "1");
            let id = vm.list.with_untracked(|l| l.items()[0].id);
            let n = vm.delete_command(id).unwrap();
            assert_eq!(n.description, "Milk removed from your list");
            assert!(vm.list.with_untracked(|l| l.is_empty()));
        });
    }
}
