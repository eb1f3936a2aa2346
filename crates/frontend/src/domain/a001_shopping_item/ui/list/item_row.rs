use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use contracts::domain::a001_shopping_item::{ShoppingItem, ShoppingItemId};
use leptos::prelude::*;

/// One row of the list: checkbox, name, price and delete button.
///
/// Name and price never change after creation, so they are taken from the
/// snapshot; only `purchased` is reactive.
#[component]
pub fn ItemRow(
    item: ShoppingItem,
    #[prop(into)] purchased: Signal<bool>,
    on_toggle: Callback<ShoppingItemId>,
    on_delete: Callback<ShoppingItemId>,
) -> impl IntoView {
    let id = item.id;
    let checkbox_label = format!("Mark {} as purchased", item.name);
    let delete_label = format!("Remove {}", item.name);
    let price = format_price(item.price);

    let row_class = move || {
        if purchased.get() {
            "shopping-item shopping-item--purchased"
        } else {
            "shopping-item"
        }
    };
    let name_class = move || {
        if purchased.get() {
            "shopping-item__name shopping-item__text--done"
        } else {
            "shopping-item__name"
        }
    };
    let price_class = move || {
        if purchased.get() {
            "shopping-item__price shopping-item__text--done"
        } else {
            "shopping-item__price"
        }
    };

    view! {
        <CardAnimated>
            <div class=row_class>
                <Checkbox
                    label=checkbox_label
                    checked=purchased
                    id=format!("purchased-{}", id)
                    on_change=Callback::new(move |_| on_toggle.run(id))
                />
                <div class="shopping-item__body">
                    <h3 class=name_class>{item.name}</h3>
                </div>
                <div class=price_class>{price}</div>
                <Button
                    variant="outline"
                    size="sm"
                    class="button--danger"
                    aria_label=delete_label
                    on_click=Callback::new(move |_| on_delete.run(id))
                >
                    {icon("trash")}
                </Button>
            </div>
        </CardAnimated>
    }
}
