use leptos::*;

/// Overlay modal container. Clicking the overlay or the close button fires
/// `on_close`; clicks inside the panel stay inside.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.call(())>
                <div class="modal-panel" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{move || title.get()}</h3>
                        <button
                            type="button"
                            class="modal-close"
                            on:click=move |_| on_close.call(())
                        >
                            {"\u{2715}"}
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
