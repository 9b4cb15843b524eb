#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use codecamp_core::types::EventDate;
use codecamp_db::models::camp::Camp;
use codecamp_db::repositories::{CampRepository, ChangeSet, InMemoryCampRepo};
use codecamp_db::DbError;
use http_body_util::BodyExt;
use tower::ServiceExt;

use codecamp_api::config::ServerConfig;
use codecamp_api::router::build_app_router;
use codecamp_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given repository.
///
/// Goes through `build_app_router`, so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(camps: Arc<dyn CampRepository>) -> Router {
    let config = test_config();
    let state = AppState::new(camps);
    build_app_router(state, &config)
}

/// A fresh in-memory store plus a router over it.
pub fn in_memory_app() -> (InMemoryCampRepo, Router) {
    let repo = InMemoryCampRepo::new();
    let app = build_test_app(Arc::new(repo.clone()));
    (repo, app)
}

/// A repository whose every call fails, as if the database were down.
pub struct FailingCampRepo;

fn unavailable() -> DbError {
    DbError::Unavailable("connection refused (secret-host:5432)".to_string())
}

#[async_trait]
impl CampRepository for FailingCampRepo {
    async fn get_all_camps(&self, _include_talks: bool) -> Result<Vec<Camp>, DbError> {
        Err(unavailable())
    }

    async fn get_camp(
        &self,
        _moniker: &str,
        _include_talks: bool,
    ) -> Result<Option<Camp>, DbError> {
        Err(unavailable())
    }

    async fn get_camps_by_event_date(
        &self,
        _date: EventDate,
        _include_talks: bool,
    ) -> Result<Vec<Camp>, DbError> {
        Err(unavailable())
    }

    async fn save_changes(&self, _changes: ChangeSet) -> Result<bool, DbError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(unavailable())
    }
}

/// A repository that panics on every call, as a buggy store would.
pub struct PanickingCampRepo;

#[async_trait]
impl CampRepository for PanickingCampRepo {
    async fn get_all_camps(&self, _include_talks: bool) -> Result<Vec<Camp>, DbError> {
        panic!("camp store poisoned (secret-host:5432)")
    }

    async fn get_camp(
        &self,
        _moniker: &str,
        _include_talks: bool,
    ) -> Result<Option<Camp>, DbError> {
        panic!("camp store poisoned (secret-host:5432)")
    }

    async fn get_camps_by_event_date(
        &self,
        _date: EventDate,
        _include_talks: bool,
    ) -> Result<Vec<Camp>, DbError> {
        panic!("camp store poisoned (secret-host:5432)")
    }

    async fn save_changes(&self, _changes: ChangeSet) -> Result<bool, DbError> {
        panic!("camp store poisoned (secret-host:5432)")
    }

    async fn ping(&self) -> Result<(), DbError> {
        panic!("camp store poisoned (secret-host:5432)")
    }
}

/// Reads succeed from an inner store, but every save reports zero rows.
pub struct NoOpSaveRepo(pub InMemoryCampRepo);

#[async_trait]
impl CampRepository for NoOpSaveRepo {
    async fn get_all_camps(&self, include_talks: bool) -> Result<Vec<Camp>, DbError> {
        self.0.get_all_camps(include_talks).await
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, DbError> {
        self.0.get_camp(moniker, include_talks).await
    }

    async fn get_camps_by_event_date(
        &self,
        date: EventDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, DbError> {
        self.0.get_camps_by_event_date(date, include_talks).await
    }

    async fn save_changes(&self, _changes: ChangeSet) -> Result<bool, DbError> {
        Ok(false)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
