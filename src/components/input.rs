use leptos::*;

/// Labeled, controlled text input. The value lives in the caller's state;
/// every keystroke goes through `on_input`.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = String::from("text"), into)] input_type: String,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            {(!label.is_empty()).then(|| view! { <span class="field-label">{label.clone()}</span> })}
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}
