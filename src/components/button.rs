use leptos::*;

/// Button with an optional loading indicator. Disabled while loading so a
/// second submission cannot start from the same control.
#[component]
pub fn Button(
    children: Children,
    #[prop(default = String::from("button"), into)] button_type: String,
    #[prop(default = String::from("primary"), into)] variant: String,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=format!("btn btn-{}", variant)
            disabled=move || loading.get()
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.call(());
                }
            }
        >
            {move || loading.get().then(|| view! { <span class="spinner spinner-inline"></span> })}
            {children()}
        </button>
    }
}
