// Copyright PingCAP Inc. 2025.
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; version 2 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

/// Integration tests for the operational endpoints
///
/// These tests verify:
/// - Metrics endpoint returns Prometheus format
/// - Liveness and readiness endpoints
/// - Readiness reports a dead store actor
/// - Transport errors map to 500 and timeouts to 504
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cliches::actor::spawn_store;
use cliches::cliches_http::ClicheHttpHandler;
use cliches::config::StoreConfig;
use cliches::observability::health;
use cliches::store::{ClicheStore, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Store whose every call fails with the same transport error
struct FailingStore {
    error: fn() -> StoreError,
}

impl FailingStore {
    fn closed() -> Arc<dyn ClicheStore> {
        Arc::new(Self {
            error: || StoreError::ActorClosed,
        })
    }

    fn reply_dropped() -> Arc<dyn ClicheStore> {
        Arc::new(Self {
            error: || StoreError::ReplyDropped,
        })
    }

    fn timed_out() -> Arc<dyn ClicheStore> {
        Arc::new(Self {
            error: || StoreError::Timeout(Duration::from_millis(50)),
        })
    }
}

#[async_trait]
impl ClicheStore for FailingStore {
    async fn list_all(&self) -> Result<String, StoreError> {
        Err((self.error)())
    }
    async fn get_one(&self, _id: u64) -> Result<String, StoreError> {
        Err((self.error)())
    }
    async fn create(&self, _cliche: String, _counter: String) -> Result<String, StoreError> {
        Err((self.error)())
    }
    async fn edit(
        &self,
        _id: u64,
        _cliche: String,
        _counter: String,
    ) -> Result<String, StoreError> {
        Err((self.error)())
    }
    async fn delete(&self, _id: u64) -> Result<String, StoreError> {
        Err((self.error)())
    }
}

fn live_store() -> Arc<dyn ClicheStore> {
    Arc::new(spawn_store(&StoreConfig::default()))
}

async fn get(store: Arc<dyn ClicheStore>, uri: &str) -> (StatusCode, String) {
    let app = ClicheHttpHandler::new(store).router();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_metrics_endpoint_returns_prometheus_format() {
    let store = live_store();
    // Make sure actor and HTTP metrics have samples.
    get(store.clone(), "/cliches").await;

    let (status, body) = get(store, "/_metrics").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.contains("# HELP"));
    assert!(body.contains("# TYPE"));
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("actor_operation_duration_seconds"));
}

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let (status, body) = get(live_store(), "/_health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\""));
    assert!(body.contains("\"ok\""));
    assert!(body.contains("\"timestamp\""));
}

#[tokio::test]
async fn test_ready_endpoint_reports_healthy_store() {
    let (status, body) = get(live_store(), "/_ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"checks\""));
    assert!(body.contains("\"store\""));
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_ready_endpoint_reports_closed_store() {
    let (status, body) = get(FailingStore::closed(), "/_ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("unhealthy"));
}

#[tokio::test]
async fn test_closed_store_is_a_server_error_on_cliche_routes() {
    let (status, body) = get(FailingStore::closed(), "/cliches/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("not running"));
}

#[tokio::test]
async fn test_dropped_reply_is_a_server_error_on_cliche_routes() {
    let (status, body) = get(FailingStore::reply_dropped(), "/cliches").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("dropped the reply"));
}

#[tokio::test]
async fn test_timed_out_store_is_a_gateway_timeout_on_cliche_routes() {
    for uri in ["/", "/cliches", "/cliches/1"] {
        let (status, body) = get(FailingStore::timed_out(), uri).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT, "GET {uri}");
        assert!(body.contains("timed out"), "GET {uri}: {body}");
    }
}

#[tokio::test]
async fn test_ready_endpoint_reports_timed_out_store() {
    let (status, body) = get(FailingStore::timed_out(), "/_ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("unhealthy"));
}

#[tokio::test]
async fn test_health_status_for_live_store() {
    let status = health::get_health_status(&live_store()).await;
    assert!(status.is_healthy());
    assert_eq!(status.checks.len(), 1);
    assert_eq!(status.checks[0].name, "store");
}
