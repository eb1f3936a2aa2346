use crate::routes::routes::PORTFOLIO_PATH;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    log::warn!("no route for current location");

    view! {
        <div class="page page--not-found">
            <h1>"404"</h1>
            <p class="muted">"This page does not exist."</p>
            <A href=PORTFOLIO_PATH>
                <span class="link">"Back to the portfolio"</span>
            </A>
        </div>
    }
}
