use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::models::ActivityCollection;

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// HTTP client for the activities API. Single-shot requests, no retries,
/// no timeouts beyond reqwest defaults.
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivitiesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole board in one response.
    pub async fn get_activities(&self) -> Result<ActivityCollection, ApiError> {
        let url = format!("{}/activities", self.base_url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!("Activities response (status {}): {}", status, text);

        let activities: ActivityCollection = serde_json::from_str(&text)?;
        Ok(activities)
    }

    /// Sign `email` up for `activity`. Returns the server's message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.post_action(activity, "signup", email).await
    }

    /// Remove `email` from `activity`. Returns the server's message.
    pub async fn unsign(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.post_action(activity, "unsign", email).await
    }

    async fn post_action(
        &self,
        activity: &str,
        action: &str,
        email: &str,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email),
        );

        let resp = self.http.post(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!("{} response (status {}): {}", action, status, text);

        if status.is_success() {
            let body: MessageBody = serde_json::from_str(&text)?;
            Ok(body.message)
        } else {
            // An unparseable error body falls through as ApiError::Parse.
            let body: serde_json::Value = serde_json::from_str(&text)?;
            let detail = body
                .get("detail")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());
            Err(ApiError::Server { status, detail })
        }
    }
}
