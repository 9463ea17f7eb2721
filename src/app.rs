/// Root of the back-office UI. Wires the shared context and page chrome
/// around the two admin pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::customers_page::CustomersPage;
use crate::components::products_page::ProductsPage;
use crate::utils::dialog::Dialogs;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Browser-backed dialogs; tests substitute a recording double.
    provide_context(Dialogs::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/shopdesk.css"/>
        <Title text="Shopdesk Admin"/>
        <Router>
            <nav class="top-nav">
                <span class="brand">{ "Shopdesk" }</span>
                <div class="top-nav-links">
                    <A href="/">{ "Customers" }</A>
                    <A href="/products">{ "Products" }</A>
                </div>
            </nav>
            <main class="page">
                <Routes>
                    <Route path="/" view=CustomersPage/>
                    <Route path="/products" view=ProductsPage/>
                </Routes>
            </main>
        </Router>
    }
}
