use axum::{routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

mod handlers;
mod service;
mod validation;

pub use handlers::Controller;
pub use service::{Error, EventInput, EventService, NgoInput, NgoService, Result, Service};
pub use validation::{FieldError, Schema, SchemaError};

/// Setup the routes
///
/// Events are served under `/events` and NGOs under `/ngos`.
pub fn router<E, N>(events: Controller<E>, ngos: Controller<N>) -> Router
where
    E: Service,
    N: Service,
{
    Router::new()
        .route("/health", get(handlers::health))
        .merge(handlers::resource("/events", events))
        .merge(handlers::resource("/ngos", ngos))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
