use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::{schedule_message_hide, views, AppState};

/// Form payload shared by the signup and removal routes.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    pub activity: String,
    pub email: String,
}

/// Render the board as it stands. No refetch here: the board state is the
/// page, and it only changes through the action routes.
pub async fn board_page(State(state): State<AppState>) -> Html<String> {
    let board = state.board.lock().await;
    Html(views::render_page(&board))
}

pub async fn submit_signup(
    State(state): State<AppState>,
    Form(form): Form<ActionForm>,
) -> Redirect {
    state
        .board
        .lock()
        .await
        .submit_signup(&form.activity, &form.email)
        .await;
    schedule_message_hide(Arc::clone(&state.board));
    Redirect::to("/")
}

pub async fn remove_participant(
    State(state): State<AppState>,
    Form(form): Form<ActionForm>,
) -> Redirect {
    state
        .board
        .lock()
        .await
        .remove_participant(&form.activity, &form.email)
        .await;
    schedule_message_hide(Arc::clone(&state.board));
    Redirect::to("/")
}

pub async fn reload_board(State(state): State<AppState>) -> Redirect {
    let _ = state.board.lock().await.reload().await;
    Redirect::to("/")
}
