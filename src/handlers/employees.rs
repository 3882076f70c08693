//! Form-consuming handlers: add an employee, fetch one by identifier.
//!
//! Both open their own database connection and close it before rendering.
//! A failed connection renders the error page; a failed insert renders the
//! confirmation page with a placeholder name; a failed or empty lookup
//! renders the result page with empty fields.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::Html;
use sqlx::Connection;
use tracing::{error, info};

use crate::assets::BACKGROUND_IMAGE_FILE;
use crate::db::{Employee, LookupQuery};
use crate::handlers::pages::render;
use crate::router::AppState;

/// Name shown on the confirmation page when the insert fails.
const INSERT_FAILED_NAME: &str = "Error occurred";

/// Message shown on the error page when the database is unreachable.
pub const DB_CONNECT_FAILED: &str = "Database connection failed";

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    message: &'a str,
    bg_image: &'a str,
    my_name: &'a str,
}

#[derive(Template)]
#[template(path = "addempoutput.html")]
struct AddedPage<'a> {
    name: &'a str,
    bg_image: &'a str,
    my_name: &'a str,
}

#[derive(Template)]
#[template(path = "getempoutput.html")]
struct ResultPage<'a> {
    emp_id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    primary_skill: &'a str,
    location: &'a str,
    bg_image: &'a str,
    my_name: &'a str,
}

pub async fn add_employee(
    State(state): State<AppState>,
    Form(employee): Form<Employee>,
) -> Html<String> {
    let my_name = &state.config.my_name;

    let mut conn = match state.store.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "database connection failed");
            return render(ErrorPage {
                message: DB_CONNECT_FAILED,
                bg_image: BACKGROUND_IMAGE_FILE,
                my_name,
            });
        }
    };

    let name = match state.store.insert(&mut conn, &employee).await {
        Ok(()) => {
            info!(emp_id = %employee.emp_id, "employee inserted");
            employee.full_name()
        }
        Err(e) => {
            error!(emp_id = %employee.emp_id, error = %e, "employee insert failed");
            INSERT_FAILED_NAME.to_string()
        }
    };

    // Connection is per-request; close it before rendering.
    let _ = conn.close().await;

    render(AddedPage {
        name: &name,
        bg_image: BACKGROUND_IMAGE_FILE,
        my_name,
    })
}

pub async fn fetch_employee(
    State(state): State<AppState>,
    Form(query): Form<LookupQuery>,
) -> Html<String> {
    let my_name = &state.config.my_name;

    let mut conn = match state.store.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "database connection failed");
            return render(ErrorPage {
                message: DB_CONNECT_FAILED,
                bg_image: BACKGROUND_IMAGE_FILE,
                my_name,
            });
        }
    };

    // A failed select renders the same empty page as a miss.
    let found = match state.store.lookup(&mut conn, &query.emp_id).await {
        Ok(found) => found,
        Err(e) => {
            error!(emp_id = %query.emp_id, error = %e, "employee lookup failed");
            None
        }
    };

    let _ = conn.close().await;

    let employee = found.unwrap_or_default();
    render(ResultPage {
        emp_id: &employee.emp_id,
        first_name: &employee.first_name,
        last_name: &employee.last_name,
        primary_skill: &employee.primary_skill,
        location: &employee.location,
        bg_image: BACKGROUND_IMAGE_FILE,
        my_name,
    })
}
