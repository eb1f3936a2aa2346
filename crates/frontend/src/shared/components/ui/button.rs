use leptos::prelude::*;

/// Button component with variants (primary, outline, destructive) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", or "destructive"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible label for icon-only buttons
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        "destructive" => "button--destructive",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--sm",
        Some("lg") => "button--lg",
        _ => "",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            aria-label=move || aria_label.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
