use crate::domain::a001_shopping_item::ui::list::ShoppingListPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::portfolio::PortfolioPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Portfolio landing page
pub const PORTFOLIO_PATH: &str = "/";
/// Shopping list application
pub const APP_PATH: &str = "/app";

#[component]
pub fn AppRoutes() -> impl IntoView {
    // The shopping list lives inside its route: navigating away unmounts the
    // page and drops the list with it.
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=PortfolioPage />
                    <Route path=path!("/app") view=ShoppingListPage />
                </Routes>
            </main>
        </Router>
    }
}
