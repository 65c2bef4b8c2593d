use tracing::{info, warn};

use crate::client::ActivitiesClient;
use crate::error::ApiError;
use crate::models::{Activity, ActivityCollection, MessageKind, StatusMessage};

/// Notice rendered in place of the activity list when a load fails.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";

const SIGNUP_FALLBACK_DETAIL: &str = "An error occurred";
const SIGNUP_GENERIC_FAILURE: &str = "Failed to sign up. Please try again.";
const REMOVE_FALLBACK_DETAIL: &str = "Failed to remove participant";
const REMOVE_GENERIC_FAILURE: &str = "Failed to remove participant. Please try again.";

/// What occupies the list area of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loaded(ActivityCollection),
    Failed,
}

/// Signup form contents, kept on the board so a rejected submission renders
/// back with the fields still filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// The board controller: one value constructed at startup that owns the API
/// client, the rendered collection, the selectable-activity options, the
/// signup form and the status banner. All user actions dispatch through it.
pub struct ActivityBoard {
    client: ActivitiesClient,
    list: ListView,
    options: Vec<String>,
    form: SignupForm,
    message: Option<StatusMessage>,
}

impl ActivityBoard {
    pub fn new(client: ActivitiesClient) -> Self {
        Self {
            client,
            list: ListView::Loaded(ActivityCollection::new()),
            options: Vec::new(),
            form: SignupForm::default(),
            message: None,
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        match &self.list {
            ListView::Loaded(collection) => collection.get(name),
            ListView::Failed => None,
        }
    }

    /// Full refetch. Success replaces the list and the selectable options
    /// wholesale; failure puts the static notice in the list area and leaves
    /// the options in their prior state.
    pub async fn reload(&mut self) -> Result<(), ApiError> {
        match self.client.get_activities().await {
            Ok(collection) => {
                self.options = collection.keys().cloned().collect();
                self.list = ListView::Loaded(collection);
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching activities: {e}");
                self.list = ListView::Failed;
                Err(e)
            }
        }
    }

    /// Submit the signup form. Success shows the server's message, clears
    /// the form and reloads the whole collection so the new participant
    /// appears; failure keeps the form populated and shows an error banner.
    pub async fn submit_signup(&mut self, activity: &str, email: &str) {
        self.form = SignupForm {
            email: email.to_string(),
            activity: activity.to_string(),
        };

        match self.client.signup(activity, email).await {
            Ok(message) => {
                info!("Signed up {} for {}", email, activity);
                self.set_message(MessageKind::Success, message);
                self.form = SignupForm::default();
                // A reload failure surfaces in the list area, not in the
                // banner, so the success message stands either way.
                let _ = self.reload().await;
            }
            Err(e) => {
                warn!("Error signing up: {e}");
                let text = match e {
                    ApiError::Server {
                        detail: Some(detail),
                        ..
                    } => detail,
                    ApiError::Server { detail: None, .. } => SIGNUP_FALLBACK_DETAIL.to_string(),
                    ApiError::Network(_) | ApiError::Parse(_) => {
                        SIGNUP_GENERIC_FAILURE.to_string()
                    }
                };
                self.set_message(MessageKind::Error, text);
            }
        }
    }

    /// Remove one participant. Success drops exactly that row from the
    /// in-memory card — no refetch; the count header and spots-left derive
    /// from the mutated roster. Failure leaves the row in place.
    pub async fn remove_participant(&mut self, activity: &str, email: &str) {
        match self.client.unsign(activity, email).await {
            Ok(message) => {
                info!("Removed {} from {}", email, activity);
                if let ListView::Loaded(collection) = &mut self.list {
                    if let Some(card) = collection.get_mut(activity) {
                        if let Some(pos) = card.participants.iter().position(|p| p == email) {
                            card.participants.remove(pos);
                        }
                    }
                }
                self.set_message(MessageKind::Success, message);
            }
            Err(e) => {
                warn!("Error removing participant: {e}");
                let text = match e {
                    ApiError::Server {
                        detail: Some(detail),
                        ..
                    } => detail,
                    ApiError::Server { detail: None, .. } => REMOVE_FALLBACK_DETAIL.to_string(),
                    ApiError::Network(_) | ApiError::Parse(_) => {
                        REMOVE_GENERIC_FAILURE.to_string()
                    }
                };
                self.set_message(MessageKind::Error, text);
            }
        }
    }

    /// Show a new banner, replacing whatever was there.
    pub fn set_message(&mut self, kind: MessageKind, text: String) {
        self.message = Some(StatusMessage {
            text,
            kind,
            visible: true,
        });
    }

    /// Timer-driven hide. Unconditional: a hide scheduled while an earlier
    /// banner was up also hides whichever banner is showing now.
    pub fn hide_message(&mut self) {
        if let Some(message) = &mut self.message {
            message.visible = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(client: ActivitiesClient, list: ListView, options: Vec<String>) -> Self {
        Self {
            client,
            list,
            options,
            form: SignupForm::default(),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ActivityBoard {
        ActivityBoard::new(ActivitiesClient::new("http://localhost:0"))
    }

    #[test]
    fn new_board_is_empty_and_quiet() {
        let board = board();
        assert_eq!(*board.list(), ListView::Loaded(ActivityCollection::new()));
        assert!(board.options().is_empty());
        assert!(board.message().is_none());
    }

    #[test]
    fn message_cycle_keeps_text_when_hidden() {
        let mut board = board();
        board.set_message(MessageKind::Success, "Signed up".into());
        let shown = board.message().unwrap();
        assert!(shown.visible);
        assert_eq!(shown.kind, MessageKind::Success);

        board.hide_message();
        let hidden = board.message().unwrap();
        assert!(!hidden.visible);
        assert_eq!(hidden.text, "Signed up");
    }

    #[test]
    fn new_message_replaces_hidden_one() {
        let mut board = board();
        board.set_message(MessageKind::Success, "first".into());
        board.hide_message();
        board.set_message(MessageKind::Error, "second".into());

        let shown = board.message().unwrap();
        assert!(shown.visible);
        assert_eq!(shown.kind, MessageKind::Error);
        assert_eq!(shown.text, "second");
    }
}
