use super::view_model::ShoppingListViewModel;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Name + price inputs and the add button. Enter in either field adds too.
#[component]
pub fn AddItemForm(vm: ShoppingListViewModel, on_add: Callback<()>) -> impl IntoView {
    let name = Signal::derive(move || vm.form.with(|f| f.name.clone()));
    let price = Signal::derive(move || vm.form.with(|f| f.price.clone()));

    view! {
        <CardAnimated class="add-form" style="margin-bottom: 2rem;">
            <div class="add-form__row">
                <Input
                    value=name
                    on_input=Callback::new(move |v| vm.set_name(v))
                    on_enter=on_add
                    placeholder="Enter item name..."
                    aria_label="Item name"
                    class="add-form__name"
                />
                <Input
                    value=price
                    input_type="number"
                    step="0.01"
                    on_input=Callback::new(move |v| vm.set_price(v))
                    on_enter=on_add
                    placeholder="Price ($)"
                    aria_label="Price"
                    class="add-form__price"
                />
                <Button on_click=Callback::new(move |_| on_add.run(()))>
                    {icon("plus")}
                    "Add Item"
                </Button>
            </div>
        </CardAnimated>
    }
}
