//! staffdir web front end — axum router over the core store.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | landing page |
//! | `GET /search` | search form (posts JSON via `/static/script.js`) |
//! | `POST /search_results` | JSON search |
//! | `GET /add` | add-employee form |
//! | `POST /add_employee` | insert, then redirect to `/` |

pub mod handlers;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use staffdir_core::{config::DirectoryConfig, Store};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub directory: Arc<DirectoryConfig>,
}

impl AppState {
    pub fn new(store: Store, directory: DirectoryConfig) -> Self {
        Self {
            store,
            directory: Arc::new(directory),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search_page))
        .route("/search_results", post(handlers::search_results))
        .route("/add", get(handlers::add_page))
        .route("/add_employee", post(handlers::add_employee))
        .route("/static/script.js", get(handlers::script))
        .with_state(state)
}

/// Serve the router on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    info!(addr = %listener.local_addr()?, "staffdir listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
