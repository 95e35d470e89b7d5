use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::parse_invite_id;
use crate::AppState;
use crate::error::AppError;
use crate::models::invite::{CreateInviteResponse, Invite, NewInvite};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/invite", post(create_invite))
        .route("/api/invite/{id}", get(get_invite))
}

async fn create_invite(
    State(state): State<AppState>,
    payload: Result<Json<NewInvite>, JsonRejection>,
) -> Result<Json<CreateInviteResponse>, AppError> {
    let Json(body) = payload?;

    // Reject before touching the store.
    body.require_event_type()?;
    body.reject_nul()?;

    let invite = state.store.insert(&body).await?;
    tracing::info!(id = %invite.id, event_type = invite.event_type.as_str(), "invite created");

    let url = state.config.share_url(&format!("/invite/{}", invite.id));
    Ok(Json(CreateInviteResponse { id: invite.id, url }))
}

async fn get_invite(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Invite>, AppError> {
    let not_found = || AppError::NotFound("Invite not found".into());

    let id = id
        .ok()
        .and_then(|Path(id)| parse_invite_id(&id))
        .ok_or_else(not_found)?;
    let invite = state.store.find(id).await?.ok_or_else(not_found)?;

    Ok(Json(invite))
}
