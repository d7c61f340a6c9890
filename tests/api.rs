mod helpers;

use flowerstation_sdk::{APIError, CreateUserInput, EventInput, StationSDK, UpdateEventInput, UpdateMeInput, ID};
use helpers::setup::spawn_app;
use reqwest::StatusCode;

fn birthday(date: &str) -> EventInput {
    EventInput {
        title: "Mom's birthday".into(),
        date: date.into(),
        event_type: "Birthday".into(),
        attendees: vec!["dad@example.com".into()],
        ..Default::default()
    }
}

fn assert_status<T: std::fmt::Debug>(res: Result<T, APIError>, status: StatusCode) {
    match res {
        Err(APIError::UnexpectedStatusCode(code)) => assert_eq!(code, status),
        other => panic!("Expected status {}, got {:?}", status, other),
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_create_user() {
    let (app, sdk) = spawn_app().await;
    let input = || CreateUserInput {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password_hash: Some("hash".into()),
    };

    // Without the api key
    assert_status(sdk.user.create(input()).await, StatusCode::UNAUTHORIZED);

    let res = app.admin().user.create(input()).await.expect("To create user");
    assert_eq!(res.user.email, "ada@example.com");
    assert!(res.user.email_notifications);

    assert_status(app.admin().user.create(input()).await, StatusCode::CONFLICT);

    let session = StationSDK::with_bearer_token(app.address.clone(), res.token);
    let me = session.user.me().await.expect("To get me");
    assert_eq!(me.user.id, res.user.id);
}

#[actix_web::main]
#[test]
async fn test_update_me() {
    let (app, sdk) = spawn_app().await;
    let (_, session) = app.login("Ada", "ada@example.com").await;

    let res = session
        .user
        .update_me(UpdateMeInput {
            name: Some("Ada Lovelace".into()),
            email_notifications: Some(false),
        })
        .await
        .expect("To update me");
    assert_eq!(res.user.name, "Ada Lovelace");
    assert!(!res.user.email_notifications);

    assert_status(sdk.user.me().await, StatusCode::UNAUTHORIZED);
    let forged = StationSDK::with_bearer_token(app.address.clone(), "not-a-token");
    assert_status(forged.user.me().await, StatusCode::UNAUTHORIZED);
}

#[actix_web::main]
#[test]
async fn test_event_crud() {
    let (app, sdk) = spawn_app().await;
    let (user, session) = app.login("Ada", "ada@example.com").await;

    assert_status(sdk.event.create(birthday("2026-10-20")).await, StatusCode::UNAUTHORIZED);

    let later = session
        .event
        .create(birthday("2026-12-24"))
        .await
        .expect("To create event")
        .event;
    let sooner = session
        .event
        .create(birthday("2026-10-20"))
        .await
        .expect("To create event")
        .event;
    assert_eq!(sooner.user_id, user.id);
    assert_eq!(sooner.event_type, "Birthday");
    assert!(!sooner.reminder_sent);

    let events = session.event.list().await.expect("To list events").events;
    let ids = events.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids, vec![sooner.id.clone(), later.id.clone()]);

    let mut changes = birthday("2026-10-21");
    changes.event_type = "Other".into();
    changes.custom_type = Some("Surprise party".into());
    let updated = session
        .event
        .update(UpdateEventInput {
            event_id: sooner.id.clone(),
            event: changes,
        })
        .await
        .expect("To update event")
        .event;
    assert_eq!(updated.event_type, "Other");
    assert_eq!(updated.custom_type.as_deref(), Some("Surprise party"));
    assert_eq!(updated.date_ts, sooner.date_ts + 1000 * 60 * 60 * 24);

    let fetched = session.event.get(sooner.id.clone()).await.expect("To get event");
    assert_eq!(fetched.event.custom_type.as_deref(), Some("Surprise party"));

    // Other users can not see or touch the event
    let (_, intruder) = app.login("Eve", "eve@example.com").await;
    assert_status(intruder.event.get(sooner.id.clone()).await, StatusCode::NOT_FOUND);
    assert_status(intruder.event.delete(sooner.id.clone()).await, StatusCode::NOT_FOUND);

    session
        .event
        .delete(sooner.id.clone())
        .await
        .expect("To delete event");
    assert_status(session.event.get(sooner.id.clone()).await, StatusCode::NOT_FOUND);
    assert_status(session.event.get(ID::new()).await, StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_create_event_validation() {
    let (app, _) = spawn_app().await;
    let (_, session) = app.login("Ada", "ada@example.com").await;

    let mut missing_title = birthday("2026-10-20");
    missing_title.title = " ".into();
    assert_status(session.event.create(missing_title).await, StatusCode::BAD_REQUEST);

    assert_status(
        session.event.create(birthday("20-10-2026")).await,
        StatusCode::BAD_REQUEST,
    );

    let mut other_without_label = birthday("2026-10-20");
    other_without_label.event_type = "Other".into();
    assert_status(
        session.event.create(other_without_label).await,
        StatusCode::BAD_REQUEST,
    );

    let mut bad_attendee = birthday("2026-10-20");
    bad_attendee.attendees = vec!["not-an-email".into()];
    assert_status(session.event.create(bad_attendee).await, StatusCode::BAD_REQUEST);

    assert!(session.event.list().await.unwrap().events.is_empty());
}

#[actix_web::main]
#[test]
async fn test_notifications() {
    let (app, _) = spawn_app().await;
    let (_, session) = app.login("Ada", "ada@example.com").await;

    let res = session.notification.mark_all_read().await.expect("To mark all read");
    assert!(res.success);
    assert_eq!(res.updated, 0);

    let first = session.event.create(birthday("2026-10-20")).await.unwrap().event;
    let second = session.event.create(birthday("2026-11-20")).await.unwrap().event;

    let res = session.notification.list().await.expect("To list notifications");
    assert_eq!(res.unread_count, 2);
    assert_eq!(res.notifications.len(), 2);
    let created_first = res
        .notifications
        .iter()
        .find(|n| n.event_id == first.id)
        .expect("Notification about the first event");
    assert_eq!(created_first.event_title.as_deref(), Some("Mom's birthday"));
    assert_eq!(
        created_first.message,
        "New event \"Mom's birthday\" created for 2026-10-20"
    );

    let res = session
        .notification
        .mark_read(created_first.id.clone())
        .await
        .expect("To mark read");
    assert_eq!(res.updated, 1);
    assert_eq!(session.notification.list().await.unwrap().unread_count, 1);

    // Deleting an event removes its notifications
    session.event.delete(second.id.clone()).await.unwrap();
    let res = session.notification.list().await.unwrap();
    assert_eq!(res.notifications.len(), 1);
    assert_eq!(res.unread_count, 0);

    let res = session.notification.mark_all_read().await.unwrap();
    assert_eq!(res.updated, 0);
}
