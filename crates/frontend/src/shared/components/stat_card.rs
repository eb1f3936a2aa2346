use crate::shared::components::card_animated::CardAnimated;
use leptos::prelude::*;

/// One read-only summary metric: big value over a small label
#[component]
pub fn StatCard(
    /// Label displayed below the value
    #[prop(into)]
    label: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Render the value in the accent colour
    #[prop(optional)]
    accent: bool,
    /// Appearance delay for the card animation
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let value_class = if accent {
        "stat-card__value stat-card__value--accent"
    } else {
        "stat-card__value"
    };

    view! {
        <CardAnimated delay_ms=delay_ms class="stat-card">
            <div class=value_class>{move || value.get()}</div>
            <div class="stat-card__label">{label}</div>
        </CardAnimated>
    }
}
