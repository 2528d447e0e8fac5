//! Response relay: upstream → caller.
//!
//! # Responsibilities
//! - Copy status and headers from the upstream response
//! - Strip `Transfer-Encoding` after the copy
//! - Hand the upstream body over as a stream
//!
//! # Design Decisions
//! - Streaming hand-off; the body is never buffered here
//! - Headers are relayed without validation or normalization
//! - Only `Transfer-Encoding` is removed: the caller's leg is framed by
//!   this proxy's own transport, and the upstream's value would conflict

use axum::body::{Body, Bytes};
use axum::http::{header, Response};
use hyper::body::Body as HttpBody;

/// Translate an upstream response into the response sent to the caller.
///
/// The upstream body (and the connection behind it) is owned by the
/// returned response; dropping it on any path releases the upstream.
pub fn relay_response<B>(upstream: Response<B>) -> Response<Body>
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<axum::BoxError>,
{
    let (parts, body) = upstream.into_parts();

    let mut response = Response::new(Body::new(body));
    *response.status_mut() = parts.status;

    for (name, value) in &parts.headers {
        response.headers_mut().append(name, value.clone());
    }
    response.headers_mut().remove(header::TRANSFER_ENCODING);

    response
}
