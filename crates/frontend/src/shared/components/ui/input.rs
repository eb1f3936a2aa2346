use leptos::prelude::*;

/// Input component; Enter submits through `on_enter`
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Fired when Enter is pressed inside the field
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step attribute for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Accessible label when there is no visible one
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            class=move || format!("form__input {}", additional_class())
            type=input_t
            step=move || step.get()
            prop:value=move || value.get()
            placeholder=input_placeholder
            aria-label=move || aria_label.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    if let Some(handler) = on_enter {
                        ev.prevent_default();
                        handler.run(());
                    }
                }
            }
        />
    }
}
