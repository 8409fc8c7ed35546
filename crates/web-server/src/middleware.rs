use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{DateTime, Utc};

/// Static label attached to every request by the first link of the chain.
pub const SERVICE_LABEL: &str = "marketboard";

/// Value inserted by [`tag_request`] and consumed by [`stamp_request`].
#[derive(Debug, Clone)]
pub struct RequestLabel(pub &'static str);

/// The completed per-request context: assembled once the chain has run,
/// read-only for the rest of the request, and dropped with it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub label: &'static str,
    pub received_at: DateTime<Utc>,
}

/// First link: tags the request with the service label.
pub async fn tag_request(mut request: Request, next: Next) -> Response {
    tracing::debug!("request-context chain: tag");
    request.extensions_mut().insert(RequestLabel(SERVICE_LABEL));
    next.run(request).await
}

/// Second link: extends the tagged request into the full [`RequestContext`]
/// by stamping the UTC receipt time. Each link builds a new value rather
/// than mutating shared state.
pub async fn stamp_request(mut request: Request, next: Next) -> Response {
    let label = request
        .extensions()
        .get::<RequestLabel>()
        .map(|l| l.0)
        .unwrap_or(SERVICE_LABEL);

    let context = RequestContext {
        label,
        received_at: Utc::now(),
    };
    tracing::debug!(label = context.label, received_at = %context.received_at, "request-context chain: stamp");
    request.extensions_mut().insert(context);
    next.run(request).await
}
