mod helpers;

use flowerstation_sdk::{APIError, EventInput, StationSDK};
use helpers::setup::spawn_app_at;
use reqwest::StatusCode;

/// Thu Oct 15 2026 12:00:00 UTC
const NOW: i64 = 1792022400000 + 12 * 60 * 60 * 1000;

fn event(title: &str, date: &str, attendees: &[&str]) -> EventInput {
    EventInput {
        title: title.into(),
        date: date.into(),
        time: Some("18:00".into()),
        location: Some("The garden".into()),
        event_type: "Celebration".into(),
        attendees: attendees.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    }
}

#[actix_web::main]
#[test]
async fn test_cron_requires_secret() {
    let (app, sdk) = spawn_app_at(NOW).await;

    match sdk.reminder.send_reminders().await {
        Err(APIError::UnexpectedStatusCode(code)) => assert_eq!(code, StatusCode::UNAUTHORIZED),
        other => panic!("Expected unauthorized, got {:?}", other),
    }
    let wrong = StationSDK::with_bearer_token(app.address.clone(), "wrong");
    assert!(wrong.reminder.send_reminders().await.is_err());

    let res = app.cron().reminder.send_reminders().await.expect("To run sweep");
    assert!(res.success);
    assert_eq!(res.message, "Processed 0 events");
    assert!(res.results.is_empty());
}

#[actix_web::main]
#[test]
async fn test_sweep_reminds_todays_events_once() {
    let (app, _) = spawn_app_at(NOW).await;
    let (_, session) = app.login("Ada", "a@x.com").await;

    let today = session
        .event
        .create(event("Garden party", "2026-10-15", &["b@x.com", "c@x.com"]))
        .await
        .unwrap()
        .event;
    let tomorrow = session
        .event
        .create(event("Tomorrow", "2026-10-16", &["b@x.com"]))
        .await
        .unwrap()
        .event;

    let res = app.cron().reminder.send_reminders().await.expect("To run sweep");
    assert_eq!(res.message, "Processed 1 events");
    let recipients = res
        .results
        .iter()
        .map(|r| (r.recipient.as_str(), r.success))
        .collect::<Vec<_>>();
    assert_eq!(
        recipients,
        vec![("a@x.com", true), ("b@x.com", true), ("c@x.com", true)]
    );
    assert!(res.results.iter().all(|r| r.event_id == today.id));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].1.subject, "Reminder: Garden party Today!");
    assert!(sent[0]
        .1
        .text
        .contains("is today, Thursday, October 15, 2026 at 18:00 at The garden."));

    assert!(session.event.get(today.id.clone()).await.unwrap().event.reminder_sent);
    assert!(!session.event.get(tomorrow.id.clone()).await.unwrap().event.reminder_sent);

    let notifications = session.notification.list().await.unwrap().notifications;
    assert!(notifications
        .iter()
        .any(|n| n.event_id == today.id && n.message == "Reminder: Your event \"Garden party\" is today!"));

    // Second sweep the same day
    let res = app.cron().reminder.send_reminders().await.unwrap();
    assert_eq!(res.message, "Processed 0 events");
    assert_eq!(app.mailer.sent().len(), 3);
}

#[actix_web::main]
#[test]
async fn test_sweep_reports_failed_recipients() {
    let (app, _) = spawn_app_at(NOW).await;
    let (_, session) = app.login("Ada", "a@x.com").await;
    app.mailer.fail_for("b@x.com");

    let e = session
        .event
        .create(event("Garden party", "2026-10-15", &["b@x.com", "c@x.com"]))
        .await
        .unwrap()
        .event;

    let res = app.cron().reminder.send_reminders().await.unwrap();
    assert!(res.success);
    let failed = res
        .results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.recipient.as_str())
        .collect::<Vec<_>>();
    assert_eq!(failed, vec!["b@x.com"]);
    assert_eq!(res.results.len(), 3);

    // The event is still marked so the failed mail is not retried
    assert!(session.event.get(e.id.clone()).await.unwrap().event.reminder_sent);
}

#[actix_web::main]
#[test]
async fn test_updating_reminded_event_keeps_it_reminded() {
    let (app, _) = spawn_app_at(NOW).await;
    let (_, session) = app.login("Ada", "a@x.com").await;
    let e = session
        .event
        .create(event("Garden party", "2026-10-15", &[]))
        .await
        .unwrap()
        .event;
    app.cron().reminder.send_reminders().await.unwrap();

    let updated = session
        .event
        .update(flowerstation_sdk::UpdateEventInput {
            event_id: e.id.clone(),
            event: event("Garden party v2", "2026-10-15", &["d@x.com"]),
        })
        .await
        .unwrap()
        .event;
    assert!(updated.reminder_sent);

    let res = app.cron().reminder.send_reminders().await.unwrap();
    assert_eq!(res.message, "Processed 0 events");
}

#[actix_web::main]
#[test]
async fn test_send_test_email() {
    let (app, _) = spawn_app_at(NOW).await;

    let res = app
        .cron()
        .reminder
        .send_test_email("tester@x.com")
        .await
        .expect("To send test email");
    assert!(res.success);
    assert!(res.message_id.is_some());

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "tester@x.com");
    assert_eq!(sent[0].1.subject, "Reminder: Test Event Today!");
    assert!(sent[0].1.text.contains("at 12:00 PM at Test Location"));

    match app.cron().reminder.send_test_email("").await {
        Err(APIError::UnexpectedStatusCode(code)) => assert_eq!(code, StatusCode::BAD_REQUEST),
        other => panic!("Expected bad request, got {:?}", other),
    }
}
