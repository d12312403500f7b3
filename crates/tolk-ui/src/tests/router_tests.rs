use std::collections::HashMap;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use kanal::AsyncReceiver;
use tolk_types::{
    AppEvent, LanguageOption, SessionError, SessionEvent, SessionId, SessionSnapshot,
    SessionState, TranslationOutcome,
};
use tower::ServiceExt;

use crate::{CatalogView, UiBridge, UiState, router};

/// Minimal stand-in for the app event loop: edits update the input,
/// translate upper-cases it
async fn fake_app(rx: AsyncReceiver<AppEvent>) {
    let mut sessions: HashMap<SessionId, SessionState> = HashMap::new();

    while let Ok(event) = rx.recv().await {
        match event {
            AppEvent::OpenSession { reply } => {
                let id = SessionId::new();
                let state = SessionState::new("en".into(), "hi".into());
                sessions.insert(id, state.clone());
                let _ = reply.send(Ok(SessionSnapshot { id, state }));
            }
            AppEvent::Session { id, event, reply } => {
                let result = match sessions.get_mut(&id) {
                    Some(state) => {
                        match event {
                            SessionEvent::Edit { text } => state.input = text,
                            SessionEvent::Translate => {
                                state.output =
                                    Some(TranslationOutcome::Translated(state.input.to_uppercase()))
                            }
                            _ => {}
                        }
                        Ok(SessionSnapshot {
                            id,
                            state: state.clone(),
                        })
                    }
                    None => Err(SessionError::UnknownSession(id)),
                };
                let _ = reply.send(result);
            }
            AppEvent::ViewSession { id, reply } => {
                let result = sessions
                    .get(&id)
                    .map(|state| SessionSnapshot {
                        id,
                        state: state.clone(),
                    })
                    .ok_or(SessionError::UnknownSession(id));
                let _ = reply.send(result);
            }
            AppEvent::CloseSession { id, reply } => {
                let result = sessions
                    .remove(&id)
                    .map(|_| ())
                    .ok_or(SessionError::UnknownSession(id));
                let _ = reply.send(result);
            }
        }
    }
}

fn catalog() -> CatalogView {
    CatalogView {
        title: "Test".to_string(),
        provider: "Stub".to_string(),
        languages: vec![
            LanguageOption::new("English", "en"),
            LanguageOption::new("Hindi", "hi"),
        ],
        examples: vec!["👋 Hello World".to_string()],
    }
}

fn test_router() -> Router {
    let (tx, rx) = kanal::bounded_async(8);
    tokio::spawn(fake_app(rx));
    router(UiState::new(UiBridge::new(tx), catalog()))
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn open_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn index_and_health() {
    let router = test_router();

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Translate Now"));

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_lists_languages_and_examples() {
    let router = test_router();

    let req = Request::builder()
        .uri("/api/catalog")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["provider"], "Stub");
    assert_eq!(body["languages"][1]["code"], "hi");
    assert_eq!(body["languages"][1]["label"], "Hindi");
    assert_eq!(body["examples"][0], "👋 Hello World");
}

#[tokio::test]
async fn session_round_trip() {
    let router = test_router();

    let resp = router.clone().oneshot(open_request()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let opened = json_body(resp).await;
    assert_eq!(opened["source"], "en");
    assert_eq!(opened["target"], "hi");
    assert!(opened["output"].is_null());
    let id = opened["id"].as_str().unwrap().to_string();

    let events = format!("/api/sessions/{id}/events");
    let resp = router
        .clone()
        .oneshot(post_json(&events, r#"{"type":"edit","text":"hello"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["input"], "hello");

    let resp = router
        .clone()
        .oneshot(post_json(&events, r#"{"type":"translate"}"#))
        .await
        .unwrap();
    let view = json_body(resp).await;
    assert_eq!(view["output"]["kind"], "translated");
    assert_eq!(view["output"]["text"], "HELLO");

    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/sessions/{id}"))
        .body(Body::empty())
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = Request::builder()
        .uri(format!("/api/sessions/{id}"))
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(
        json_body(resp).await["error"]
            .as_str()
            .unwrap()
            .contains("Unknown session")
    );
}

#[tokio::test]
async fn malformed_events_are_rejected() {
    let router = test_router();
    let resp = router.clone().oneshot(open_request()).await.unwrap();
    let id = json_body(resp).await["id"].as_str().unwrap().to_string();

    let resp = router
        .clone()
        .oneshot(post_json(
            &format!("/api/sessions/{id}/events"),
            r#"{"type":"explode"}"#,
        ))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());

    let resp = router
        .oneshot(post_json(
            "/api/sessions/not-a-uuid/events",
            r#"{"type":"swap"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stopped_app_loop_is_a_server_error() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    drop(rx);
    let router = router(UiState::new(UiBridge::new(tx), catalog()));

    let resp = router.oneshot(open_request()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// App loop that is out of room: no new sessions, every session queue full
async fn saturated_app(rx: AsyncReceiver<AppEvent>) {
    while let Ok(event) = rx.recv().await {
        match event {
            AppEvent::OpenSession { reply } => {
                let _ = reply.send(Err(SessionError::SessionLimit(256)));
            }
            AppEvent::Session { id, reply, .. } | AppEvent::ViewSession { id, reply } => {
                let _ = reply.send(Err(SessionError::Busy(id)));
            }
            AppEvent::CloseSession { reply, .. } => {
                let _ = reply.send(Ok(()));
            }
        }
    }
}

fn saturated_router() -> Router {
    let (tx, rx) = kanal::bounded_async(8);
    tokio::spawn(saturated_app(rx));
    router(UiState::new(UiBridge::new(tx), catalog()))
}

#[tokio::test]
async fn session_limit_is_service_unavailable() {
    let resp = saturated_router().oneshot(open_request()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(resp).await;
    assert_eq!(body["error"], "Session limit reached (256 open sessions)");
}

#[tokio::test]
async fn full_session_queue_is_too_many_requests() {
    let id = SessionId::new();
    let resp = saturated_router()
        .oneshot(post_json(
            &format!("/api/sessions/{id}/events"),
            r#"{"type":"translate"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = json_body(resp).await;
    assert_eq!(
        body["error"],
        format!("Session {id} has too many pending events")
    );
    assert_eq!(body.as_object().unwrap().len(), 1);
}
