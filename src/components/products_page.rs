/// Products page: the read-only catalog, and the entry point that opens the
/// reviews modal with a product context.
use leptos::*;

use crate::components::{button::Button, card::Card, reviews_modal::ReviewsModal};
use crate::models::product::Product;
use crate::services::products as product_service;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(true);
    let (reviews_open, set_reviews_open) = create_signal(false);
    let (active_product, set_active_product) = create_signal(None::<Product>);

    create_effect(move |_| {
        spawn_local(async move {
            match product_service::get_all().await {
                Ok(list) => set_products.set(list),
                Err(err) => leptos::logging::error!("[UI] Failed to fetch products: {err}"),
            }
            set_loading.set(false);
        });
    });

    let open_reviews = move |product: Product| {
        set_active_product.set(Some(product));
        set_reviews_open.set(true);
    };
    let close_reviews = Callback::new(move |_| set_reviews_open.set(false));

    view! {
        <div class="page-body">
            <div class="page-header">
                <div>
                    <h1>{ "Products" }</h1>
                    <p class="page-subtitle">{ "Browse the catalog and its reviews" }</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="page-loading"><span class="spinner"></span></div>
                    }
                        .into_view();
                }
                let list = products.get();
                if list.is_empty() {
                    view! { <div class="empty-state">{ "No products in the catalog." }</div> }
                        .into_view()
                } else {
                    view! {
                        <div class="product-grid">
                            {list
                                .into_iter()
                                .map(|product| {
                                    let review_target = product.clone();
                                    view! {
                                        <Card class="product-card">
                                            <h3>{product.name.clone()}</h3>
                                            <Button on_press=Callback::new(move |_| {
                                                open_reviews(review_target.clone())
                                            })>
                                                { "Reviews" }
                                            </Button>
                                        </Card>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_view()
                }
            }}

            <ReviewsModal open=reviews_open on_close=close_reviews product=active_product/>
        </div>
    }
}
