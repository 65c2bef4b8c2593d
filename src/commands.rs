use anyhow::{Context, Result};

use crate::client::ActivitiesClient;
use crate::error::ApiError;
use crate::models::Activity;

pub async fn run_list(base_url: &str, verbose: bool) -> Result<()> {
    let client = ActivitiesClient::new(base_url);
    let activities = client
        .get_activities()
        .await
        .context("Failed to fetch activities")?;

    if verbose {
        println!("{}", serde_json::to_string_pretty(&activities)?);
        return Ok(());
    }

    if activities.is_empty() {
        println!("No activities available.");
        return Ok(());
    }

    for (name, activity) in &activities {
        print_activity(name, activity);
    }

    Ok(())
}

fn print_activity(name: &str, activity: &Activity) {
    println!("{}", name);
    println!("  {}", activity.description);
    println!("  Schedule: {}", activity.schedule);
    println!(
        "  {} spots left ({}/{})",
        activity.spots_left(),
        activity.participants.len(),
        activity.max_participants
    );
    if activity.participants.is_empty() {
        println!("  No participants yet");
    } else {
        println!("  Participants ({}):", activity.participants.len());
        for email in &activity.participants {
            println!("    - {}", email);
        }
    }
    println!();
}

pub async fn run_signup(base_url: &str, activity: &str, email: &str) -> Result<()> {
    let client = ActivitiesClient::new(base_url);
    match client.signup(activity, email).await {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e) => Err(describe_failure(e, "Signup")),
    }
}

pub async fn run_unsign(base_url: &str, activity: &str, email: &str) -> Result<()> {
    let client = ActivitiesClient::new(base_url);
    match client.unsign(activity, email).await {
        Ok(message) => {
            println!("{}", message);
            Ok(())
        }
        Err(e) => Err(describe_failure(e, "Unsign")),
    }
}

fn describe_failure(e: ApiError, action: &str) -> anyhow::Error {
    match e {
        ApiError::Server {
            detail: Some(detail),
            ..
        } => anyhow::anyhow!("{} rejected: {}", action, detail),
        other => anyhow::Error::new(other).context(format!("{} request failed", action)),
    }
}
