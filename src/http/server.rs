//! HTTP server setup and the rewrite-forward-relay pipeline.
//!
//! # Responsibilities
//! - Build the Axum router and middleware stack
//! - Intercept requests a rewrite rule claims and forward them through
//!   the shared upstream client
//! - Delegate everything else to the routed handlers (landing page)
//! - Serve until the shutdown handle fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{LandingConfig, ProxyConfig};
use crate::http::request::{build_upstream_request, RequestIdLayer, X_REQUEST_ID};
use crate::http::response::relay_response;
use crate::lifecycle::ShutdownHandle;
use crate::routing::RuleSet;

/// Shared outbound client, able to reach http and https upstreams.
pub type UpstreamClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Application state injected into the middleware and handlers.
///
/// The client is the only thing shared across requests; it is built once
/// and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RuleSet>,
    pub client: UpstreamClient,
    pub landing: LandingConfig,
}

/// HTTP server for the rewrite proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let client: UpstreamClient =
            Client::builder(TokioExecutor::new()).build(HttpsConnector::new());
        Self::with_client(config, client)
    }

    /// Create a server around an externally constructed outbound client.
    pub fn with_client(config: ProxyConfig, client: UpstreamClient) -> Self {
        let state = AppState {
            rules: Arc::new(RuleSet::from_config(&config.rules)),
            client,
            landing: config.landing.clone(),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let mut router = Router::new();
        if state.landing.enabled {
            router = router.route("/", get(landing_page));
        }

        router
            .with_state(state.clone())
            .layer(middleware::from_fn_with_state(state, rewrite_middleware))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until shutdown is triggered.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownHandle,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Rewrite middleware: forward on a rule match, delegate otherwise.
async fn rewrite_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(target) = state.rules.resolve(request.uri()) else {
        return next.run(request).await;
    };

    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        target = %target,
        "Forwarding request"
    );

    let outbound = build_upstream_request(request, target);

    // Resolves once the upstream's response head arrives; the body streams
    // behind it. Dropping this future (caller disconnect) aborts the
    // upstream exchange and releases its connection.
    match state.client.request(outbound).await {
        Ok(upstream) => {
            tracing::debug!(
                request_id = %request_id,
                status = %upstream.status(),
                "Relaying upstream response"
            );
            relay_response(upstream)
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                error = %error,
                "Upstream request failed"
            );
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

/// Static landing page linking into the proxied path.
async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<a href='{}'>{}</a>",
        state.landing.link_path, state.landing.link_text
    ))
}
