use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_price;
use contracts::domain::a001_shopping_item::ShoppingSummary;
use leptos::prelude::*;

#[component]
pub fn SummaryCards(summary: Memo<ShoppingSummary>) -> impl IntoView {
    view! {
        <div class="summary-grid">
            <StatCard
                label="Total Items"
                value=Signal::derive(move || summary.get().item_count.to_string())
            />
            <StatCard
                label="Total Budget"
                value=Signal::derive(move || format_price(summary.get().total_price))
                delay_ms=80
            />
            <StatCard
                label="Remaining"
                value=Signal::derive(move || format_price(summary.get().remaining_price))
                accent=true
                delay_ms=160
            />
        </div>
    }
}
