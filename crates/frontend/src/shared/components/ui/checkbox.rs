use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Accessible label (the row text is usually the visible label)
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let wrapper_class = move || {
        if checked.get() {
            format!(
                "form__checkbox-wrapper form__checkbox-wrapper--checked {}",
                additional_class()
            )
        } else {
            format!("form__checkbox-wrapper {}", additional_class())
        }
    };

    view! {
        <span class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                aria-label=move || label.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </span>
    }
}
