//! Request pipeline stages wrapped around the routed API.
//!
//! Outermost first: tracing, deadline, origin guard, CORS headers, cookie jar,
//! shared data, framework error mapping, routes. Each stage is a plain
//! [`Endpoint`] wrapper so it can be exercised on its own.

use std::sync::Arc;
use std::time::Duration;

use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::{StatusCode, header};
use poem::{Endpoint, EndpointExt, Error, IntoResponse, Response};
use poem_openapi::error::{
    AuthorizationError, ContentTypeError, ParseParamError, ParseRequestPayloadError,
};

use crate::api::error::ErrorResponse;
use crate::config::cors_config::CorsConfig;

fn unauthorized_response() -> Response {
    ErrorResponse::new("Unauthorized", "auth.unauthenticated")
        .into_response_with(StatusCode::UNAUTHORIZED)
}

fn cors_rejection_response() -> Response {
    ErrorResponse::new("CorsRejected", "cors.origin_not_allowed")
        .into_response_with(StatusCode::FORBIDDEN)
}

fn deadline_exceeded_response() -> Response {
    ErrorResponse::new("Timeout", "request.deadline_exceeded")
        .into_response_with(StatusCode::GATEWAY_TIMEOUT)
}

/// Maps errors raised by the framework itself (extractors, routing, security
/// schemes) onto the same `{name, message}` body the handlers use.
pub fn error_response(err: Error) -> Response {
    if err.is::<AuthorizationError>() {
        return unauthorized_response();
    }

    let (name, message, status) = if err.is::<ParseRequestPayloadError>() {
        ("ValidationError", "request.invalid_body", StatusCode::BAD_REQUEST)
    } else if err.is::<ContentTypeError>() {
        (
            "ValidationError",
            "request.unsupported_content_type",
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        )
    } else if err.is::<ParseParamError>() {
        ("ValidationError", "request.invalid_parameter", StatusCode::BAD_REQUEST)
    } else if err.is::<NotFoundError>() {
        ("NotFound", "route.not_found", StatusCode::NOT_FOUND)
    } else if err.is::<MethodNotAllowedError>() {
        (
            "MethodNotAllowed",
            "route.method_not_allowed",
            StatusCode::METHOD_NOT_ALLOWED,
        )
    } else if err.status().is_server_error() {
        ("InternalError", "internal.unexpected", err.status())
    } else {
        ("BadRequest", "request.rejected", err.status())
    };

    tracing::debug!(error = %err, %status, "framework error mapped");
    ErrorResponse::new(name, message).into_response_with(status)
}

/// Rejects requests whose `Origin` is outside the allow-set before they reach
/// any route. Requests without an `Origin` header pass through.
pub fn origin_guard<E>(ep: E, cors: Arc<CorsConfig>) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    ep.around(move |ep, req| {
        let cors = cors.clone();
        async move {
            if let Some(origin) = req.headers().get(header::ORIGIN) {
                let allowed = origin.to_str().is_ok_and(|origin| cors.allows(origin));
                if !allowed {
                    tracing::warn!(origin = ?origin, path = %req.uri().path(), "cors origin rejected");
                    return Ok(cors_rejection_response());
                }
            }
            ep.call(req).await.map(IntoResponse::into_response)
        }
    })
}

/// Answers 504 when the inner endpoint does not finish within `timeout`.
pub fn deadline<E>(ep: E, timeout: Duration) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    ep.around(move |ep, req| async move {
        let path = req.uri().path().to_string();
        match tokio::time::timeout(timeout, ep.call(req)).await {
            Ok(result) => result.map(IntoResponse::into_response),
            Err(_) => {
                tracing::warn!(%path, ?timeout, "request deadline exceeded");
                Ok(deadline_exceeded_response())
            }
        }
    })
}
