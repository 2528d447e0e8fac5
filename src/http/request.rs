//! Request identity and upstream request construction.
//!
//! # Responsibilities
//! - Generate a unique request ID for log correlation
//! - Prepare the inbound request for forwarding to the upstream
//!
//! # Design Decisions
//! - The inbound body stream is handed over, not copied; bytes flow
//!   through without re-buffering
//! - GET, HEAD, DELETE and TRACE are forwarded bodiless regardless of
//!   what the caller sent (kept from the service this proxy replaces)
//! - Inbound headers travel with the body: a bodiless forward carries
//!   only the explicitly-set Host
//! - Header values are copied without validation or normalization

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Uri};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header correlating a request across log lines and the upstream leg.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Methods forwarded without a body.
fn is_bodiless(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::DELETE | Method::TRACE
    )
}

/// Build the upstream request for a resolved target URI.
///
/// The method is carried over 1:1; extension tokens are forwarded as-is,
/// never rejected. The Host header is always set to the target's host,
/// overriding whatever the caller sent.
pub fn build_upstream_request(inbound: Request<Body>, target: Uri) -> Request<Body> {
    let (parts, body) = inbound.into_parts();

    let attach_body = !is_bodiless(&parts.method);

    let mut outbound = Request::new(if attach_body { body } else { Body::empty() });
    *outbound.method_mut() = parts.method;

    if attach_body {
        *outbound.headers_mut() = parts.headers;
    }

    if let Some(host) = target.host() {
        if let Ok(value) = HeaderValue::from_str(host) {
            outbound.headers_mut().insert(header::HOST, value);
        }
    }

    *outbound.uri_mut() = target;

    outbound
}

/// Layer that stamps an `x-request-id` header onto inbound requests.
#[derive(Clone, Copy, Debug)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service wrapper produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        // A caller-supplied ID wins; generate one otherwise.
        if !req.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(req)
    }
}
