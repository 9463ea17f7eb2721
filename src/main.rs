#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::web;
    use leptos::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use shopdesk::api::{
        create_customer, create_review, delete_customer, delete_review, list_customers,
        list_products, list_reviews, update_customer,
    };
    use shopdesk::app::App;
    use shopdesk::db::Database;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // Initialize the database
    let db = Database::new("shopdesk.db").unwrap();
    db.create_schema().await.unwrap(); // Ensure the schema and seed catalog exist
    let db = Arc::new(Mutex::new(db)); // Wrap the database in an Arc<Mutex<T>> for shared state

    // Load configuration
    let conf = get_configuration(None).await.unwrap();
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    println!("listening on http://{}", &addr);

    // Start the Actix Web server
    actix_web::HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;
        let db = db.clone(); // Clone the Arc for each worker

        actix_web::App::new()
            .app_data(web::Data::new(db.clone()))
            // JSON API consumed by the admin panels
            .service(
                web::scope("/api")
                    .route("/customers", web::get().to(list_customers))
                    .route("/customers", web::post().to(create_customer))
                    .route("/customers/{id}", web::put().to(update_customer))
                    .route("/customers/{id}", web::delete().to(delete_customer))
                    .route("/products", web::get().to(list_products))
                    .route("/reviews", web::get().to(list_reviews))
                    .route("/reviews", web::post().to(create_review))
                    .route("/reviews/{id}", web::delete().to(delete_review)),
            )
            // Register server functions
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            // Pass Leptos options to the app
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use shopdesk::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
