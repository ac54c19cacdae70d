//! User services - Profilo dell'utente autenticato

use crate::entities::{PublicUser, User};
use axum::{Extension, extract::Json};
use tracing::instrument;

#[instrument(skip(current_user), fields(user_id = %current_user.id))]
pub async fn get_profile(Extension(current_user): Extension<User>) -> Json<PublicUser> {
    Json(current_user.to_public())
}
