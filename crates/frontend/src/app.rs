use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // Toasts are dispatched through ToasterInjection, which only exists
    // below ToasterProvider.
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
            </ToasterProvider>
        </ConfigProvider>
    }
}
