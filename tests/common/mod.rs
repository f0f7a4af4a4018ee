//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use std::sync::Arc;
use tempfile::TempDir;
use ticket_desk::api::{AppState, Views, router};
use ticket_desk::config::DatabaseSettings;
use ticket_desk::core::{Priority, Status, Ticket, TicketBuilder};
use ticket_desk::storage::{SqliteStorage, TicketRepository};
use tower::ServiceExt;

/// A full application over a fresh database
pub struct TestApp {
    _temp_dir: TempDir,
    pub storage: SqliteStorage,
    router: Router,
}

/// Status, headers and body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    /// The `name=value` part of the first Set-Cookie header
    pub fn cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
    }

    /// Ticket ids listed on an index page, in display order
    pub fn listed_ids(&self) -> Vec<i64> {
        self.body
            .split("data-ticket-id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter_map(|id| id.parse().ok())
            .collect()
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let settings = DatabaseSettings {
            url: format!("sqlite://{}", temp_dir.path().join("tickets.db").display()),
            max_connections: 1,
        };
        let storage = SqliteStorage::connect(&settings)
            .await
            .expect("Failed to open database");
        storage.migrate().await.expect("Failed to migrate database");

        let views = Views::new().expect("Failed to compile templates");
        let state = AppState::new(Arc::new(storage.clone()), views);

        Self {
            _temp_dir: temp_dir,
            storage,
            router: router(Arc::new(state)),
        }
    }

    pub async fn seed(&self, title: &str, status: Status, priority: Priority) -> Ticket {
        self.storage
            .create(TicketBuilder::new().title(title).status(status).priority(priority).build())
            .await
            .expect("Failed to seed ticket")
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("body is UTF-8"),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(
            Request::get(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn form(&self, method: Method, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::delete(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}
