use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use mergington_activities::database::{seed, ActivityStore};
use mergington_activities::web::{build_router, AppState};

struct TestApp {
    state: AppState,
    static_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<h1>Mergington High School</h1>",
        )
        .unwrap();
        Self {
            state: AppState::new(ActivityStore::new(seed::default_catalog())),
            static_dir,
        }
    }

    fn router(&self) -> Router {
        build_router(self.state.clone(), self.static_dir.path())
    }

    async fn get(&self, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self
            .send(Request::post(uri).body(Body::empty()).unwrap())
            .await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn activities(&self) -> Value {
        let (status, _, body) = self.get("/activities").await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, body.to_vec())
    }
}

#[tokio::test]
async fn test_root_redirect() {
    let app = TestApp::new();
    let (status, headers, _) = app.get("/").await;

    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(headers[header::LOCATION], "/static/index.html");
}

#[tokio::test]
async fn test_landing_page_is_served() {
    let app = TestApp::new();
    let (status, headers, body) = app.get("/static/index.html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert!(String::from_utf8(body).unwrap().contains("Mergington"));
}

#[tokio::test]
async fn test_get_activities_includes_all_fields() {
    let app = TestApp::new();
    let activities = app.activities().await;

    let activities = activities.as_object().unwrap();
    assert!(activities.contains_key("Chess Club"));
    assert!(activities.contains_key("Programming Class"));
    for (_, activity) in activities {
        assert!(activity["description"].is_string());
        assert!(activity["schedule"].is_string());
        assert!(activity["max_participants"].is_u64());
        assert!(activity["participants"].is_array());
    }
}

#[tokio::test]
async fn test_signup_new_participant() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Chess%20Club/signup?email=newstudent@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("newstudent@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let activities = app.activities().await;
    let participants = activities["Chess Club"]["participants"].as_array().unwrap();
    assert_eq!(
        participants.last().unwrap(),
        &Value::from("newstudent@mergington.edu")
    );
}

#[tokio::test]
async fn test_signup_existing_participant() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Chess%20Club/signup?email=michael@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already signed up"));
}

#[tokio::test]
async fn test_signup_nonexistent_activity() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Nonexistent%20Activity/signup?email=student@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_signup_at_full_capacity() {
    let app = TestApp::new();
    for i in 0..14 {
        let (status, _) = app
            .post(&format!(
                "/activities/Basketball%20Team/signup?email=student{}@mergington.edu",
                i
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app
        .post("/activities/Basketball%20Team/signup?email=overflow@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[tokio::test]
async fn test_signup_without_email() {
    let app = TestApp::new();
    let (status, body) = app.post("/activities/Chess%20Club/signup").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("email"));
    assert_eq!(
        app.activities().await["Chess Club"]["participants"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn test_unregister_participant() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Chess%20Club/unregister?email=michael@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::OK);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("michael@mergington.edu"));
    assert!(message.contains("Chess Club"));

    let activities = app.activities().await;
    assert_eq!(
        activities["Chess Club"]["participants"],
        serde_json::json!(["daniel@mergington.edu"])
    );
}

#[tokio::test]
async fn test_unregister_nonexistent_participant() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Chess%20Club/unregister?email=notregistered@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not registered"));
}

#[tokio::test]
async fn test_unregister_from_nonexistent_activity() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/activities/Nonexistent%20Activity/unregister?email=student@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_empty_email_is_accepted() {
    let app = TestApp::new();

    let (status, _) = app
        .post("/activities/Nonexistent%20Activity/signup?email=")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.post("/activities/Chess%20Club/signup?email=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Signed up  for Chess Club");

    let activities = app.activities().await;
    assert_eq!(
        activities["Chess Club"]["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu", ""])
    );
}
