//! Application state and route table.
//!
//! # Routes
//!
//! | Route | Handler |
//! |---|---|
//! | `/` | add-employee form (refreshes the background image first) |
//! | `/about` | static about page |
//! | `/addemp` | insert a record, render the confirmation page |
//! | `/getemp` | lookup form |
//! | `/fetchdata` | select a record, render the result page |
//! | `/static/*` | local static files, including the background image |

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;

use crate::assets::{AssetFetcher, STATIC_DIR};
use crate::config::Config;
use crate::db::EmployeeStore;
use crate::handlers::{employees, pages};

/// Shared read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: EmployeeStore,
    pub assets: AssetFetcher,
}

impl AppState {
    pub fn new(config: Config, store: EmployeeStore, assets: AssetFetcher) -> Self {
        Self {
            config: Arc::new(config),
            store,
            assets,
        }
    }
}

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home).post(pages::home))
        .route("/about", get(pages::about).post(pages::about))
        .route("/addemp", post(employees::add_employee))
        .route("/getemp", get(pages::lookup_form).post(pages::lookup_form))
        .route(
            "/fetchdata",
            get(employees::fetch_employee).post(employees::fetch_employee),
        )
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
}
