use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::server::{
    executor::GatewayExecutor,
    gateway::{
        testing::{guild, member, ready_gateway, FakeAction, FakeBackend},
        GatewayClient,
    },
    model::discord::GuildSnapshot,
    router::build_app,
    state::AppState,
};


struct TestApp {
    app: Router,
    gateway: GatewayClient,
    backend: Arc<FakeBackend>,
    // Held so the executor outlives the test's requests.
    _executor: GatewayExecutor,
}

/// Guild 1 "Alpha" with members alice (2) and bob (3).
fn alpha() -> GuildSnapshot {
    guild(1, "Alpha", &[member(2, "alice"), member(3, "bob")])
}

fn test_app(backend: Arc<FakeBackend>, guilds: Vec<GuildSnapshot>) -> TestApp {
    test_app_with_timeout(backend, guilds, Duration::from_secs(5))
}

fn test_app_with_timeout(
    backend: Arc<FakeBackend>,
    guilds: Vec<GuildSnapshot>,
    timeout: Duration,
) -> TestApp {
    let gateway = ready_gateway(backend.clone(), guilds);
    let executor = GatewayExecutor::start().unwrap();
    let state = AppState::new(gateway.clone(), executor.bridge(timeout), "Requested by bot.");
    let app = build_app(state, &"s".repeat(64)).unwrap();

    TestApp {
        app,
        gateway,
        backend,
        _executor: executor,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::get(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(form.to_string())).unwrap())
            .await
    }

    /// Renders a page and returns the session cookie it set.
    async fn visit(&self, uri: &str) -> String {
        let response = self.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }
}

/// The `name=value` part of the response's session cookie.
fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
