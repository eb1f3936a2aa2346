use crate::shared::icons::icon;
use leptos::prelude::*;

/// Centered page header: round icon badge, title and optional subtitle
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__title-row">
                <div class="icon-badge icon-badge--lg">{icon(&icon_name)}</div>
                <h1 class="page-header__title">{title}</h1>
            </div>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </div>
    }
}
