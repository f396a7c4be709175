//! Router-level tests driving the full application with `tower::ServiceExt::oneshot`.

mod author;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header, Method},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::server::{
    config::{AuthPolicy, Config},
    data::connection::ConnectionManager,
    middleware::session::AuthSession,
    model::principal::Principal,
    router, startup,
    state::AppState,
};

fn principal() -> Principal {
    Principal {
        id: 583231,
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        email: Some("octocat@github.com".to_string()),
        avatar_url: Some("https://avatars.githubusercontent.com/u/583231".to_string()),
    }
}

/// Stores the test principal in every request's session, standing in for a login.
async fn log_in(session: Session, request: Request, next: Next) -> Response {
    AuthSession::new(&session)
        .set_principal(&principal())
        .await
        .unwrap();

    next.run(request).await
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<ConnectionManager>,
}

impl TestApp {
    /// Application without a logged in user.
    pub async fn anonymous(auth_policy: AuthPolicy) -> Self {
        Self::build(auth_policy, false, Config::for_tests()).await
    }

    /// Application where every request carries the test principal.
    pub async fn logged_in(auth_policy: AuthPolicy) -> Self {
        Self::build(auth_policy, true, Config::for_tests()).await
    }

    /// Application without a logged in user, talking to the GitHub endpoints in `config`.
    pub async fn anonymous_with_config(auth_policy: AuthPolicy, config: Config) -> Self {
        Self::build(auth_policy, false, config).await
    }

    async fn build(auth_policy: AuthPolicy, logged_in: bool, config: Config) -> Self {
        let mut test = TestBuilder::new()
            .with_document_table()
            .build()
            .await
            .unwrap();
        let store = Arc::new(ConnectionManager::from_connection(test.db.take().unwrap()));

        let state = AppState::new(
            store.clone(),
            startup::setup_reqwest_client(),
            startup::setup_oauth_client(&config).unwrap(),
            config.github_api_url,
            auth_policy,
        );

        let mut app = router::router().with_state(state);
        if logged_in {
            app = app.layer(middleware::from_fn(log_in));
        }
        let router = app.layer(SessionManagerLayer::new(MemoryStore::default()));

        Self { router, store }
    }

    /// Sends a request, with `body` serialized as JSON when present.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        match body {
            Some(body) => self.send_raw(method, uri, &body.to_string()).await,
            None => {
                let request = Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap();
                self.router.clone().oneshot(request).await.unwrap()
            }
        }
    }

    /// Sends `body` verbatim with a JSON content type.
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Sends a GET carrying the given `Cookie` header.
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Number of documents currently stored in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.store
            .collection(collection)
            .unwrap()
            .find_all()
            .await
            .unwrap()
            .len()
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Field names of a validation error body, in order.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}
