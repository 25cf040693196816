use crate::observability::{health, metrics};
use crate::store::{ClicheStore, StoreError};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, MatchedPath, Path, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use std::sync::Arc;
use std::time::Instant;

/// HTTP front end for the cliche store
#[derive(Clone)]
pub struct ClicheHttpHandler {
    store: Arc<dyn ClicheStore>,
}

impl ClicheHttpHandler {
    pub fn new(store: Arc<dyn ClicheStore>) -> Self {
        Self { store }
    }

    /// Create the router for the cliche API plus the operational endpoints
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(list_all))
            .route("/cliches", get(list_all).post(create))
            .route("/cliches/:id", get(get_one).put(edit).delete(delete))
            .route("/_health", get(liveness))
            .route("/_ready", get(readiness))
            .route("/_metrics", get(prometheus_metrics))
            .route_layer(middleware::from_fn(track_http_metrics))
            .with_state(self.store)
    }
}

#[derive(Debug)]
enum HttpError {
    /// Path id is not a plain decimal number
    NotFound,
    /// Form body lacks `cliche` or `counter`
    MissingField(&'static str),
    Store(StoreError),
}

impl From<StoreError> for HttpError {
    fn from(e: StoreError) -> Self {
        HttpError::Store(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound => (StatusCode::NOT_FOUND, "404 page not found\n").into_response(),
            HttpError::MissingField(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("missing form field `{}`\n", name),
            )
                .into_response(),
            HttpError::Store(e) => {
                tracing::error!(error = %e, "store request failed");
                metrics::increment_error("StoreError", "http");
                let status = match e {
                    StoreError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                    StoreError::ActorClosed | StoreError::ReplyDropped => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, format!("{}\n", e)).into_response()
            }
        }
    }
}

/// `{id}` path segment: one or more ASCII digits
#[derive(Debug, Clone, Copy)]
struct PairId(u64);

/// Largest id the path accepts; longer digit strings clamp to it
const MAX_PATH_ID: u64 = i64::MAX as u64;

fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits, so the only possible parse failure is overflow.
    Some(raw.parse::<u64>().map_or(MAX_PATH_ID, |id| id.min(MAX_PATH_ID)))
}

#[async_trait]
impl<S> FromRequestParts<S> for PairId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::NotFound)?;
        parse_id(&raw).map(PairId).ok_or(HttpError::NotFound)
    }
}

/// Form body for create and edit
#[derive(Debug)]
struct PairForm {
    cliche: String,
    counter: String,
}

impl PairForm {
    /// Repeated fields keep their first value
    fn from_fields(fields: Vec<(String, String)>) -> Result<Self, HttpError> {
        let first = |name: &'static str| {
            fields
                .iter()
                .find(|(k, _)| k.as_str() == name)
                .map(|(_, v)| v.clone())
                .ok_or(HttpError::MissingField(name))
        };
        Ok(Self {
            cliche: first("cliche")?,
            counter: first("counter")?,
        })
    }
}

fn text(body: String) -> Response {
    (StatusCode::OK, body).into_response()
}

/// GET / and GET /cliches
async fn list_all(State(store): State<Arc<dyn ClicheStore>>) -> Result<Response, HttpError> {
    Ok(text(store.list_all().await?))
}

/// GET /cliches/{id}
async fn get_one(
    State(store): State<Arc<dyn ClicheStore>>,
    PairId(id): PairId,
) -> Result<Response, HttpError> {
    Ok(text(store.get_one(id).await?))
}

/// POST /cliches
async fn create(
    State(store): State<Arc<dyn ClicheStore>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, HttpError> {
    let form = PairForm::from_fields(fields)?;
    Ok(text(store.create(form.cliche, form.counter).await?))
}

/// PUT /cliches/{id}
async fn edit(
    State(store): State<Arc<dyn ClicheStore>>,
    PairId(id): PairId,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, HttpError> {
    let form = PairForm::from_fields(fields)?;
    Ok(text(store.edit(id, form.cliche, form.counter).await?))
}

/// DELETE /cliches/{id}
async fn delete(
    State(store): State<Arc<dyn ClicheStore>>,
    PairId(id): PairId,
) -> Result<Response, HttpError> {
    Ok(text(store.delete(id).await?))
}

/// GET /_health - process is up
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /_ready - store actor answers
async fn readiness(State(store): State<Arc<dyn ClicheStore>>) -> impl IntoResponse {
    let status = health::get_health_status(&store).await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// GET /_metrics - Prometheus exposition
async fn prometheus_metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}

async fn track_http_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    metrics::inc_concurrent_requests("http");
    let response = next.run(req).await;
    metrics::dec_concurrent_requests("http");

    let status = response.status().as_u16().to_string();
    metrics::increment_http_request(&method, &endpoint, &status);
    metrics::record_http_duration(&method, &endpoint, &status, start.elapsed().as_secs_f64());
    tracing::debug!(%method, %endpoint, %status, "request served");

    response
}
