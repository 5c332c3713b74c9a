#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use apple_footer::config::{validate_footer_links, Settings};
    use apple_footer::constants::FOOTER_LINKS;
    use apple_footer::*;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tracing::info;

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    info!("Static asset max-age: {}s", settings.cache_max_age);

    validate_footer_links(&FOOTER_LINKS).expect("Invalid footer links");
    info!("Footer links: {}", FOOTER_LINKS.len());

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None).expect("Failed to read Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app_state = AppState {
        site_root: leptos_options.site_root.to_string(),
        cache_max_age: settings.cache_max_age,
    };

    let pkg_dir = format!("{}/{}", leptos_options.site_root, leptos_options.site_pkg_dir);

    // Static routes must come before leptos routes so the fallback does not catch them
    let static_routes = Router::new()
        .nest_service("/pkg", ServeDir::new(&pkg_dir))
        .merge(assets::create_asset_routes().with_state(app_state));

    let leptos_app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = static_routes.merge(leptos_app);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    info!("Apple footer site listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
