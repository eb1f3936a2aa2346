mod add_form;
mod item_row;
mod summary;
pub mod view_model;

use crate::routes::routes::PORTFOLIO_PATH;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::notify;
use add_form::AddItemForm;
use contracts::domain::a001_shopping_item::{ShoppingItem, ShoppingItemId};
use item_row::ItemRow;
use leptos::prelude::*;
use leptos_router::components::A;
use summary::SummaryCards;
use thaw::ToasterInjection;
use view_model::ShoppingListViewModel;

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    // One list per page view; dropped when the route unmounts.
    let vm = ShoppingListViewModel::new();
    let toaster = ToasterInjection::expect_context();

    let on_add = Callback::new({
        let toaster = toaster.clone();
        move |_: ()| {
            if let Some(notification) = vm.add_command() {
                notify(&toaster, notification);
            }
        }
    });

    let on_toggle = Callback::new(move |id: ShoppingItemId| {
        vm.toggle_command(id);
    });

    let on_delete = Callback::new(move |id: ShoppingItemId| {
        if let Some(notification) = vm.delete_command(id) {
            notify(&toaster, notification);
        }
    });

    view! {
        <div class="page page--list">
            <div class="page__container page__container--narrow">
                <nav class="page__back">
                    <A href=PORTFOLIO_PATH>
                        <span class="link">{icon("arrow-left")}"Portfolio"</span>
                    </A>
                </nav>

                <PageHeader
                    title="Shopping List"
                    icon_name="shopping-cart"
                    subtitle="Keep track of your shopping items and budget"
                />

                <AddItemForm vm=vm on_add=on_add />

                <SummaryCards summary=vm.summary />

                <div class="shopping-items">
                    <Show when=move || !vm.is_empty() fallback=|| view! { <EmptyList /> }>
                        <For
                            each=move || vm.list.with(|l| l.items().to_vec())
                            key=|item: &ShoppingItem| item.id
                            children=move |item: ShoppingItem| {
                                let id = item.id;
                                let purchased = Signal::derive(move || {
                                    vm.list.with(|l| l.get(&id).map(|i| i.purchased).unwrap_or(false))
                                });
                                view! {
                                    <ItemRow
                                        item=item
                                        purchased=purchased
                                        on_toggle=on_toggle
                                        on_delete=on_delete
                                    />
                                }
                            }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EmptyList() -> impl IntoView {
    view! {
        <CardAnimated class="empty-state">
            <div class="empty-state__icon">{icon("shopping-cart")}</div>
            <p class="empty-state__title">"Your shopping list is empty"</p>
            <p class="empty-state__hint">"Add some items to get started!"</p>
        </CardAnimated>
    }
}
