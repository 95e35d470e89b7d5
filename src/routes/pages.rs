use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use super::parse_invite_id;
use crate::AppState;
use crate::error::AppError;
use crate::views;

const LANDING: &str = include_str!("../../assets/landing.html");
const CREATE_FORM: &str = include_str!("../../assets/create.html");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/invite", get(create_form))
        .route("/invite/{id}", get(view_invite))
}

async fn landing() -> Html<&'static str> {
    Html(LANDING)
}

async fn create_form() -> Html<&'static str> {
    Html(CREATE_FORM)
}

/// Unknown ids, including ones that do not even decode, render the
/// "not found" page with a 200 so the share link always shows something
/// meaningful.
async fn view_invite(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let invite = match id.ok().and_then(|Path(id)| parse_invite_id(&id)) {
        Some(id) => state.store.find(id).await?,
        None => None,
    };

    let page = match invite {
        Some(invite) => views::render_invite(&invite),
        None => {
            tracing::debug!("invite not found");
            views::render_not_found()
        }
    };

    Ok(Html(page))
}
