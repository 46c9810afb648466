//! Middleware stack for the API server
//!
//! Request IDs, tracing, timeout, and CORS. The CORS layer answers the
//! pre-flight OPTIONS probe on its own; pre-flight never reaches the
//! action handler.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use spektr_common::CorsConfig;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller identity hint header, allowed through CORS for the client
pub const USER_ID_HEADER: &str = "x-user-id";

/// Pre-flight response cache lifetime
const CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply the middleware stack to the router
///
/// Layers are applied in reverse order in tower, so the request path is:
/// RequestID -> Trace -> Timeout -> CORS -> Handler.
pub fn apply_middleware(router: Router<AppState>, cors: &CorsConfig) -> Router<AppState> {
    router
        // CORS (innermost, applied last to outgoing responses)
        .layer(create_cors_layer(cors))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation (outermost)
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// CORS layer matching the client contract
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (any origin when unset or
/// `*`), the five verbs the client uses, Content-Type plus the identity
/// hint header, cached for a day.
fn create_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin
                    .parse()
                    .map_err(|_| warn!(%origin, "Ignoring unparseable CORS origin"))
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static(USER_ID_HEADER),
        ])
        .max_age(CORS_MAX_AGE)
}
