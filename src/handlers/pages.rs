//! Static page handlers.
//!
//! Each handler fills an Askama template and returns it as HTML. The home
//! page additionally refreshes the background image before rendering.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::assets::BACKGROUND_IMAGE_FILE;
use crate::router::AppState;

pub(crate) fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(
        tmpl.render()
            .unwrap_or_else(|e| format!("<pre>Template error: {e}</pre>")),
    )
}

#[derive(Template)]
#[template(path = "addemp.html")]
struct AddEmployeePage<'a> {
    bg_image: &'a str,
    my_name: &'a str,
}

/// Home: refresh the background image, then show the add-employee form.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    state.assets.refresh().await;
    render(AddEmployeePage {
        bg_image: BACKGROUND_IMAGE_FILE,
        my_name: &state.config.my_name,
    })
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage<'a> {
    bg_image: &'a str,
    my_name: &'a str,
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    render(AboutPage {
        bg_image: BACKGROUND_IMAGE_FILE,
        my_name: &state.config.my_name,
    })
}

#[derive(Template)]
#[template(path = "getemp.html")]
struct LookupPage<'a> {
    bg_image: &'a str,
    my_name: &'a str,
}

pub async fn lookup_form(State(state): State<AppState>) -> Html<String> {
    render(LookupPage {
        bg_image: BACKGROUND_IMAGE_FILE,
        my_name: &state.config.my_name,
    })
}
