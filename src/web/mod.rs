pub mod page;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::board::ActivityBoard;
use crate::client::ActivitiesClient;

/// How long a status banner stays up before its hide timer fires.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// The board behind one async mutex: every user action is a single
/// serialized dispatch, so no two handlers mutate a card concurrently.
pub type SharedBoard = Arc<Mutex<ActivityBoard>>;

#[derive(Clone)]
pub struct AppState {
    pub board: SharedBoard,
}

pub fn router(board: SharedBoard) -> Router {
    Router::new()
        .route("/", get(page::board_page))
        .route("/signup", post(page::submit_signup))
        .route("/unsign", post(page::remove_participant))
        .route("/reload", post(page::reload_board))
        .with_state(AppState { board })
}

pub async fn serve(base_url: &str, addr: &str) -> Result<()> {
    let mut board = ActivityBoard::new(ActivitiesClient::new(base_url));
    if let Err(e) = board.reload().await {
        warn!("Initial activities load failed: {e}");
    }
    let board: SharedBoard = Arc::new(Mutex::new(board));

    let app = router(Arc::clone(&board));
    let listener = TcpListener::bind(addr).await?;
    info!("Activity board listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Schedule the banner hide. One detached timer per shown message; timers
/// are never cancelled, so a banner replaced mid-countdown can be hidden
/// early by its predecessor's timer.
pub fn schedule_message_hide(board: SharedBoard) {
    tokio::spawn(async move {
        tokio::time::sleep(MESSAGE_TTL).await;
        board.lock().await.hide_message();
    });
}
