// Start of file: /src/api/pages/routes.rs

/*
    * Every path renders as a page: prototypes add pages freely, so the
    * renderer is the catch-all rather than an enumerated route table.
*/

use axum::{routing::any, Router};

use crate::api::pages::handler::render_page;
use crate::config::state::AppState;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(render_page))
        .fallback(render_page)
}

// End of file: /src/api/pages/routes.rs
