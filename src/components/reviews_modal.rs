/// Reviews modal: opened with a product context, it loads that product's
/// reviews together with the customer choices, and offers post/delete.
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::{button::Button, input::TextInput, modal::Modal, star_rating::StarRating};
use crate::models::customer::Customer;
use crate::models::product::Product;
use crate::models::review::{Review, ReviewRequest};
use crate::services::customers as customer_service;
use crate::services::reviews as review_service;
use crate::utils::dialog::Dialogs;

const DELETE_REVIEW_PROMPT: &str = "Delete review?";

/// Controlled state for the submission form. Rating defaults to 5.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewDraft {
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = comment;
        self
    }

    pub fn into_request(self, product_id: &str, customer_id: &str) -> ReviewRequest {
        ReviewRequest {
            product_id: product_id.to_string(),
            customer_id: customer_id.to_string(),
            rating: self.rating,
            comment: self.comment,
        }
    }
}

// Checked before any request is built; a submission with no reviewer never
// reaches the network.
fn validate_review_submission(selected_customer: &str) -> Result<(), &'static str> {
    if selected_customer.is_empty() {
        Err("Please select a customer")
    } else {
        Ok(())
    }
}

#[component]
pub fn ReviewsModal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] product: Signal<Option<Product>>,
) -> impl IntoView {
    let dialogs = store_value(use_context::<Dialogs>().unwrap_or_default());
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (customer_choices, set_customer_choices) = create_signal(Vec::<Customer>::new());
    let (selected_customer, set_selected_customer) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (draft, set_draft) = create_signal(ReviewDraft::default());
    let (submitting, set_submitting) = create_signal(false);

    // Post-mutation refetch. The spinner is reserved for the initial load,
    // so this leaves `loading` alone.
    let refresh_reviews = move |product_id: String| {
        spawn_local(async move {
            match review_service::get_all(&product_id).await {
                Ok(list) => set_reviews.set(list),
                Err(err) => leptos::logging::error!("[UI] Failed to fetch reviews: {err}"),
            }
        });
    };

    // On open, pull the review list and the customer choices together. The
    // select defaults to the first customer when there is one.
    create_effect(move |_| {
        if !open.get() {
            return;
        }
        let Some(product) = product.get() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let (reviews_result, customers_result) = futures::join!(
                review_service::get_all(&product.id),
                customer_service::get_all(),
            );
            match reviews_result {
                Ok(list) => set_reviews.set(list),
                Err(err) => leptos::logging::error!("[UI] Failed to fetch reviews: {err}"),
            }
            match customers_result {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        set_selected_customer.set(first.id.clone());
                    }
                    set_customer_choices.set(list);
                }
                Err(err) => leptos::logging::error!("[UI] Failed to fetch customers: {err}"),
            }
            set_loading.set(false);
        });
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(product) = product.get_untracked() else {
            return;
        };
        if let Err(message) = validate_review_submission(&selected_customer.get_untracked()) {
            dialogs.with_value(|d| d.notify(message));
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let request = draft
                .get_untracked()
                .into_request(&product.id, &selected_customer.get_untracked());
            match review_service::create(&request).await {
                Ok(_) => {
                    set_draft.set(ReviewDraft::default());
                    refresh_reviews(product.id.clone());
                }
                Err(err) => {
                    leptos::logging::error!("[UI] Failed to add review: {err}");
                    dialogs.with_value(|d| d.notify("Failed to add review"));
                }
            }
            set_submitting.set(false);
        });
    };

    let handle_delete = move |id: String| {
        if !dialogs.with_value(|d| d.confirm(DELETE_REVIEW_PROMPT)) {
            return;
        }
        let Some(product) = product.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match review_service::delete(&id).await {
                Ok(()) => refresh_reviews(product.id.clone()),
                Err(err) => leptos::logging::error!("[UI] Failed to delete review: {err}"),
            }
        });
    };

    let title = Signal::derive(move || {
        product
            .get()
            .map(|product| format!("Reviews for {}", product.name))
            .unwrap_or_else(|| "Reviews".to_string())
    });

    view! {
        <Modal open=open on_close=on_close title=title>
            <form class="review-form" on:submit=handle_submit>
                <h4>{ "Write a Review" }</h4>
                <select
                    required=true
                    prop:value=move || selected_customer.get()
                    on:change=move |ev| set_selected_customer.set(event_target_value(&ev))
                >
                    <option value="">{ "Select Customer" }</option>
                    {move || {
                        customer_choices
                            .get()
                            .into_iter()
                            .map(|customer| {
                                view! {
                                    <option value=customer.id.clone()>
                                        {format!("{} ({})", customer.name, customer.email)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <div class="review-form-row">
                    <TextInput
                        value=Signal::derive(move || draft.get().comment)
                        on_input=Callback::new(move |value| {
                            set_draft.set(draft.get_untracked().with_comment(value))
                        })
                        placeholder="Share your thoughts..."
                        required=true
                    />
                    <div class="review-form-rating">
                        <span class="review-form-rating-label">{ "Rating" }</span>
                        <StarRating
                            rating=Signal::derive(move || draft.get().rating)
                            on_rate=Callback::new(move |rating| {
                                set_draft.set(draft.get_untracked().with_rating(rating))
                            })
                            editable=true
                        />
                    </div>
                </div>
                <div class="form-footer">
                    <Button button_type="submit" loading=submitting>
                        { "Post Review" }
                    </Button>
                </div>
            </form>

            <div class="reviews-list">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="page-loading"><span class="spinner"></span></div>
                        }
                            .into_view();
                    }
                    let list = reviews.get();
                    if list.is_empty() {
                        view! {
                            <p class="reviews-empty">{ "No reviews yet. Be the first!" }</p>
                        }
                            .into_view()
                    } else {
                        list.into_iter()
                            .map(|review| {
                                let delete_id = review.id.clone();
                                view! {
                                    <div class="review-row">
                                        <div>
                                            <div class="review-row-head">
                                                <StarRating rating=review.rating/>
                                                <span class="review-author">
                                                    {review.reviewer_label()}
                                                </span>
                                            </div>
                                            <p class="review-comment">{review.comment.clone()}</p>
                                        </div>
                                        <button
                                            type="button"
                                            class="review-delete"
                                            title="Delete"
                                            on:click=move |_| handle_delete(delete_id.clone())
                                        >
                                            {"\u{1F5D1}"}
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_view()
                    }
                }}
            </div>
        </Modal>
    }
}
