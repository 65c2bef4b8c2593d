use leptos::prelude::*;

use crate::board::{ActivityBoard, ListView, SignupForm, LOAD_FAILED_NOTICE};
use crate::models::{Activity, MessageKind, StatusMessage};

const STYLE: &str = include_str!("../style.css");

pub(crate) fn render_page(board: &ActivityBoard) -> String {
    let message_html = render_message(board.message());
    let list_html = match board.list() {
        ListView::Loaded(collection) => {
            if collection.is_empty() {
                view! { <p class="empty">"No activities available."</p> }.to_html()
            } else {
                collection
                    .iter()
                    .map(|(name, activity)| render_card(name, activity))
                    .collect()
            }
        }
        ListView::Failed => {
            view! { <p class="load-failed">{LOAD_FAILED_NOTICE}</p> }.to_html()
        }
    };
    let form_html = render_signup_form(board.options(), board.form());
    let updated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Activity Board"</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <h1>"Activity Board"</h1>
                <p class="timestamp">"Updated: " {updated}</p>
                <div inner_html=message_html />
                <section>
                    <h2>"Sign Up"</h2>
                    <div inner_html=form_html />
                </section>
                <section>
                    <h2>"Activities"</h2>
                    <form method="post" action="/reload">
                        <button type="submit" class="reload">"Refresh"</button>
                    </form>
                    <div id="activities-list" inner_html=list_html />
                </section>
            </body>
        </html>
    }
    .to_html()
}

pub(crate) fn render_card(name: &str, activity: &Activity) -> String {
    let spots = format!("{} spots left", activity.spots_left());
    let count_header = format!("Participants ({}):", activity.participants.len());
    let participants_html = if activity.participants.is_empty() {
        view! { <p class="no-participants">"No participants yet"</p> }.to_html()
    } else {
        let rows: String = activity
            .participants
            .iter()
            .map(|email| render_participant_row(name, email))
            .collect();
        view! { <ul class="participants-list" inner_html=rows /> }.to_html()
    };

    let name = name.to_string();
    let description = activity.description.clone();
    let schedule = activity.schedule.clone();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p><strong>"Schedule: "</strong>{schedule}</p>
            <p class="availability"><strong>"Availability: "</strong>{spots}</p>
            <div class="participants-section">
                <p class="participants-title"><strong>{count_header}</strong></p>
                <div inner_html=participants_html />
            </div>
        </div>
    }
    .to_html()
}

fn render_participant_row(activity: &str, email: &str) -> String {
    let activity = activity.to_string();
    let label = email.to_string();
    let value = email.to_string();

    view! {
        <li class="participant-item">
            <span class="participant-email">{label}</span>
            <form class="remove-participant" method="post" action="/unsign">
                <input type="hidden" name="activity" value=activity />
                <input type="hidden" name="email" value=value />
                <button type="submit" aria-label="Remove participant">"✕"</button>
            </form>
        </li>
    }
    .to_html()
}

fn render_signup_form(options: &[String], form: &SignupForm) -> String {
    let mut options_html =
        view! { <option value="">"-- Select an activity --"</option> }.to_html();
    for name in options {
        let value = name.clone();
        let label = name.clone();
        let rendered = if *name == form.activity {
            view! { <option value=value selected="selected">{label}</option> }.to_html()
        } else {
            view! { <option value=value>{label}</option> }.to_html()
        };
        options_html.push_str(&rendered);
    }
    let email = form.email.clone();

    view! {
        <form id="signup-form" method="post" action="/signup">
            <label for="email">"Email"</label>
            <input type="text" id="email" name="email" value=email />
            <label for="activity">"Activity"</label>
            <select id="activity" name="activity" inner_html=options_html />
            <button type="submit">"Sign Up"</button>
        </form>
    }
    .to_html()
}

pub(crate) fn render_message(message: Option<&StatusMessage>) -> String {
    let Some(message) = message else {
        return view! { <div id="message" class="message hidden"></div> }.to_html();
    };

    let kind = match message.kind {
        MessageKind::Success => "success",
        MessageKind::Error => "error",
    };
    let class = if message.visible {
        format!("message {}", kind)
    } else {
        format!("message {} hidden", kind)
    };
    let text = message.text.clone();

    view! { <div id="message" class=class>{text}</div> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ListView;
    use crate::client::ActivitiesClient;
    use crate::models::ActivityCollection;

    fn yoga() -> Activity {
        Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: 2,
            participants: vec!["a@x.com".into()],
        }
    }

    #[test]
    fn card_shows_spots_left_and_count_header() {
        let html = render_card("Yoga", &yoga());
        assert!(html.contains("Yoga"));
        assert!(html.contains("1 spots left"));
        assert!(html.contains("Participants (1):"));
        assert!(html.contains("a@x.com"));
    }

    #[test]
    fn card_shows_negative_spots_unclamped() {
        let mut activity = yoga();
        activity.participants = vec!["a@x.com".into(), "b@x.com".into(), "c@x.com".into()];
        let html = render_card("Yoga", &activity);
        assert!(html.contains("-1 spots left"));
    }

    #[test]
    fn empty_roster_shows_placeholder() {
        let mut activity = yoga();
        activity.participants.clear();
        let html = render_card("Yoga", &activity);
        assert!(html.contains("No participants yet"));
        assert!(!html.contains("participants-list"));
    }

    #[test]
    fn participant_rows_carry_removal_forms() {
        let html = render_card("Chess Club", &yoga());
        assert!(html.contains("action=\"/unsign\""));
        assert!(html.contains("name=\"activity\""));
        assert!(html.contains("Chess Club"));
    }

    #[test]
    fn failed_list_renders_static_notice() {
        let board = ActivityBoard::from_parts(
            ActivitiesClient::new("http://localhost:0"),
            ListView::Failed,
            vec!["Yoga".into()],
        );
        let html = render_page(&board);
        assert!(html.contains(LOAD_FAILED_NOTICE));
        // Failed loads leave the select options alone.
        assert!(html.contains("Yoga"));
    }

    #[test]
    fn page_renders_cards_and_select_options() {
        let mut collection = ActivityCollection::new();
        collection.insert("Yoga".into(), yoga());
        let board = ActivityBoard::from_parts(
            ActivitiesClient::new("http://localhost:0"),
            ListView::Loaded(collection),
            vec!["Yoga".into()],
        );
        let html = render_page(&board);
        assert!(html.contains("-- Select an activity --"));
        assert!(html.contains("1 spots left"));
    }

    #[test]
    fn message_banner_classes_follow_state() {
        assert!(render_message(None).contains("message hidden"));

        let shown = StatusMessage {
            text: "Signed up".into(),
            kind: MessageKind::Success,
            visible: true,
        };
        let html = render_message(Some(&shown));
        assert!(html.contains("message success"));
        assert!(!html.contains("hidden"));
        assert!(html.contains("Signed up"));

        let hidden = StatusMessage {
            visible: false,
            kind: MessageKind::Error,
            ..shown
        };
        let html = render_message(Some(&hidden));
        assert!(html.contains("message error hidden"));
    }
}
