use leptos::*;

/// A click on a star only produces a value in editable mode; read-only
/// instances never reach the setter.
fn star_click_value(editable: bool, star: u8) -> Option<u8> {
    editable.then_some(star)
}

/// Five-unit rating row. Read-only by default; with `editable` each star
/// sets the rating to its 1-based position.
#[component]
pub fn StarRating(
    #[prop(into)] rating: MaybeSignal<u8>,
    #[prop(optional, into)] on_rate: Option<Callback<u8>>,
    #[prop(default = false)] editable: bool,
) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star"
                            class=("star-filled", move || star <= rating.get())
                            class=("star-editable", editable)
                            disabled=!editable
                            on:click=move |_| {
                                if let Some(value) = star_click_value(editable, star) {
                                    if let Some(on_rate) = on_rate {
                                        on_rate.call(value);
                                    }
                                }
                            }
                        >
                            {"\u{2605}"}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_stars_never_produce_a_value() {
        for star in 1..=5 {
            assert_eq!(star_click_value(false, star), None);
        }
    }

    #[test]
    fn editable_stars_set_their_one_based_position() {
        for star in 1..=5 {
            assert_eq!(star_click_value(true, star), Some(star));
        }
    }
}
