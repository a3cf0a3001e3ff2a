//! Drive the real client against the stub server.

use internships_core::{admins, Client, Error, InternshipId};
use internships_server::{router, Limits, State};
use serde_json::json;
use tokio::{net::TcpListener, task::JoinHandle};
use tokio_util::sync::CancellationToken;

/// A stub server running on an ephemeral port, plus a client pointed at it.
struct Harness {
    client: Client,
    http: reqwest::Client,
    server: JoinHandle<()>,
}

impl Harness {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("failed to get address");

        let server = tokio::spawn(async move {
            axum::serve(listener, router(State::new(), Limits::default()))
                .await
                .expect("server failed");
        });

        Self {
            client: Client::new(&format!("http://{addr}/api")).expect("bad base URL"),
            http: reqwest::Client::new(),
            server,
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.server.abort();
    }
}

#[test_log::test(tokio::test)]
async fn create_then_get_round_trips() {
    let harness = Harness::start().await;
    let data = json!({
        "title": "Software Engineering Intern",
        "company": "TechCorp Inc.",
        "duration": "3 months",
    });

    let created = harness.client.create(&harness.http, &data).await.unwrap();
    let id = created.id().expect("server should assign an ID");

    let fetched = harness.client.get_one(&harness.http, &id).await.unwrap();

    assert!(fetched.contains(&data), "{fetched:?} does not match {data}");
    assert_eq!(fetched, created);
}

#[test_log::test(tokio::test)]
async fn remove_then_get_is_not_found() {
    let harness = Harness::start().await;

    let created = harness
        .client
        .create(&harness.http, &json!({"title": "Data Science Intern"}))
        .await
        .unwrap();
    let id = created.id().unwrap();

    harness.client.remove(&harness.http, &id).await.unwrap();

    let err = harness.client.get_one(&harness.http, &id).await.unwrap_err();
    assert!(err.is_not_found(), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn update_replaces_data() {
    let harness = Harness::start().await;

    let created = harness
        .client
        .create(&harness.http, &json!({"title": "UI/UX Design Intern"}))
        .await
        .unwrap();
    let id = created.id().unwrap();

    let changed = json!({"title": "UI/UX Design Intern", "duration": "4 months"});
    let updated = harness
        .client
        .update(&harness.http, &id, &changed)
        .await
        .unwrap();

    assert!(updated.contains(&changed));
    assert_eq!(updated.id(), Some(id.clone()));

    let fetched = harness.client.get_one(&harness.http, &id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[test_log::test(tokio::test)]
async fn list_returns_everything() {
    let harness = Harness::start().await;

    assert!(harness.client.list(&harness.http).await.unwrap().is_empty());

    for title in ["one", "two"] {
        harness
            .client
            .create(&harness.http, &json!({ "title": title }))
            .await
            .unwrap();
    }

    let all = harness.client.list(&harness.http).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[test_log::test(tokio::test)]
async fn missing_ids_are_client_errors() {
    let harness = Harness::start().await;
    let id: InternshipId = "nope".parse().unwrap();

    let err = harness.client.remove(&harness.http, &id).await.unwrap_err();

    match err {
        Error::Client { message, .. } => assert_eq!(message, "internship not found"),
        other => panic!("expected a client error, got {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn admin_creation() {
    let harness = Harness::start().await;

    let resp = admins::create(
        &harness.http,
        &harness.client,
        &admins::Req {
            email: "admin@example.com".to_string(),
            password: "longenough".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(resp, json!({"email": "admin@example.com"}));
}

#[test_log::test(tokio::test)]
async fn admin_creation_rejects_bad_credentials() {
    let harness = Harness::start().await;

    let err = admins::create(
        &harness.http,
        &harness.client,
        &admins::Req {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Client { .. }), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn cancellation_stops_requests() {
    let harness = Harness::start().await;
    let cancel = CancellationToken::new();
    let client = harness.client.clone().with_cancellation(cancel.clone());

    cancel.cancel();

    let err = client.list(&harness.http).await.unwrap_err();
    assert!(matches!(err, Error::Cancelled), "{err:?}");
}
