//! Route handlers.
//!
//! Every handler that needs the database opens its own session on the
//! blocking pool via [`with_session`]; the session is closed when the closure
//! returns.

use crate::{pages, AppState};
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use staffdir_core::{search, EmployeeRecord, NewEmployee, Session, StoreError};
use tracing::{debug, error, warn};

/// Body of the error response from `POST /search_results`.
pub const SEARCH_FAILED: &str = "Ошибка поиска";

const SCRIPT: &str = include_str!("../assets/script.js");

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Fields of the add-employee form. Everything is optional at this level so
/// that a malformed submission is discarded rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct AddEmployeeForm {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<String>,
}

impl AddEmployeeForm {
    /// Coerce the raw form fields into a [`NewEmployee`].
    ///
    /// `name` and an integer `department_id` are required; a blank or missing
    /// position becomes `default_position`.
    pub fn into_new_employee(self, default_position: &str) -> Result<NewEmployee, String> {
        let name = self.name.ok_or("missing name")?;
        let department_id = self
            .department_id
            .ok_or("missing department_id")?
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("department_id is not an integer: {e}"))?;
        let position = self
            .position
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| default_position.to_string());

        Ok(NewEmployee::new(name)
            .position(position)
            .department(department_id))
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub async fn index() -> Html<String> {
    Html(pages::index())
}

pub async fn search_page() -> Html<String> {
    Html(pages::search())
}

pub async fn add_page(State(state): State<AppState>) -> Html<String> {
    let departments = match with_session(&state, |session| session.departments()).await {
        Ok(departments) => departments,
        Err(err) => {
            error!(error = %err, "failed to list departments");
            Vec::new()
        }
    };
    Html(pages::add(&departments))
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT,
    )
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

pub async fn search_results(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Response {
    if req.query.trim().is_empty() {
        return Json(Vec::<EmployeeRecord>::new()).into_response();
    }

    let none_label = state.directory.none_label.clone();
    let query = req.query;
    let outcome = with_session(&state, move |session| search(session, &query, &none_label)).await;

    match outcome {
        Ok(results) => {
            debug!(hits = results.len(), "search served");
            Json(results).into_response()
        }
        Err(err) => {
            error!(error = %err, "search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": SEARCH_FAILED })),
            )
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Add employee
// ---------------------------------------------------------------------------

/// Insert the submitted employee, then redirect home whatever happened.
pub async fn add_employee(
    State(state): State<AppState>,
    form: Result<Form<AddEmployeeForm>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(error = %rejection, "discarding unreadable add-employee form");
            return Redirect::to("/");
        }
    };

    let new = match form.into_new_employee(&state.directory.default_position) {
        Ok(new) => new,
        Err(reason) => {
            warn!(%reason, "discarding add-employee submission");
            return Redirect::to("/");
        }
    };

    if let Err(err) = with_session(&state, move |session| session.insert_employee(&new)).await {
        warn!(error = %err, "add-employee rolled back");
    }
    Redirect::to("/")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open a session on the blocking pool and run `work` against it.
async fn with_session<T, F>(state: &AppState, work: F) -> Result<T, StoreError>
where
    F: FnOnce(&mut Session) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || {
        let mut session = store.session()?;
        work(&mut session)
    })
    .await
    .map_err(|e| StoreError::Io(std::io::Error::other(e)))?
}
