use crate::{
    service::Service,
    validation::{FieldError, Schema, SchemaError},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

mod envelope;
mod error;

use envelope::Envelope;
use error::Result;

/// Exposes a single kind of resource over HTTP
pub struct Controller<S> {
    name: &'static str,
    service: S,
    create: Schema,
    delete: Schema,
}

impl<S: Service> Controller<S> {
    /// Create a controller for a resource
    ///
    /// The name is the key the data is placed under in responses. The create schema also applies to
    /// updates.
    pub fn new(name: &'static str, service: S, create: Schema, delete: Schema) -> Self {
        Self {
            name,
            service,
            create,
            delete,
        }
    }

    /// Create a controller for events
    pub fn events(service: S) -> std::result::Result<Self, SchemaError> {
        Ok(Self::new("event", service, Schema::event()?, Schema::delete()?))
    }

    /// Create a controller for NGOs
    pub fn ngos(service: S) -> std::result::Result<Self, SchemaError> {
        Ok(Self::new("ngo", service, Schema::ngo()?, Schema::delete()?))
    }

    /// Wrap some data in a successful response
    fn envelope<T>(&self, data: T) -> Envelope<T> {
        Envelope::new(self.name, data)
    }
}

/// Create the router for a resource mounted at the given prefix
///
/// The listing answers both with and without a trailing slash.
pub(crate) fn resource<S: Service>(prefix: &str, controller: Controller<S>) -> Router {
    Router::new()
        .route(prefix, get(list::<S>))
        .route(&format!("{prefix}/"), get(list::<S>))
        .route(&format!("{prefix}/id/:id"), get(by_id::<S>))
        .route(&format!("{prefix}/slug/:slug"), get(by_slug::<S>))
        .route(&format!("{prefix}/create"), post(create::<S>))
        .route(&format!("{prefix}/update/:id"), post(update::<S>))
        .route(&format!("{prefix}/delete"), post(delete::<S>))
        .with_state(Arc::new(controller))
}

/// Check that the service is up
#[instrument(name = "health")]
pub(crate) async fn health() -> &'static str {
    "ok"
}

/// Get all the resources
#[instrument(name = "resource::list", skip_all, fields(resource = controller.name))]
async fn list<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
) -> Result<Envelope<Vec<S::Resource>>> {
    let resources = controller.service.all().await?;
    Ok(controller.envelope(resources))
}

/// Get a resource by it's ID
#[instrument(name = "resource::by_id", skip_all, fields(resource = controller.name))]
async fn by_id<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
    Path(id): Path<String>,
) -> Result<Envelope<Option<S::Resource>>> {
    let resource = controller.service.find_by_id(&id).await?;
    Ok(controller.envelope(resource))
}

/// Get a resource by it's slug
#[instrument(name = "resource::by_slug", skip_all, fields(resource = controller.name))]
async fn by_slug<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
    Path(slug): Path<String>,
) -> Result<Envelope<Option<S::Resource>>> {
    let resource = controller.service.find_by_slug(&slug).await?;
    Ok(controller.envelope(resource))
}

/// Create a new resource
#[instrument(name = "resource::create", skip_all, fields(resource = controller.name))]
async fn create<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Envelope<S::Resource>> {
    let input = validated::<S::Input>(&controller.create, body)?;
    let resource = controller.service.create(input).await?;
    Ok(controller.envelope(resource))
}

/// Replace the details of a resource
#[instrument(name = "resource::update", skip_all, fields(resource = controller.name))]
async fn update<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Envelope<Option<S::Resource>>> {
    let input = validated::<S::Input>(&controller.create, body)?;
    let resource = controller.service.update(&id, input).await?;
    Ok(controller.envelope(resource))
}

/// Delete a resource
#[instrument(name = "resource::delete", skip_all, fields(resource = controller.name))]
async fn delete<S: Service>(
    State(controller): State<Arc<Controller<S>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Envelope<Option<S::Resource>>> {
    let input = validated::<DeleteInput>(&controller.delete, body)?;
    let resource = controller.service.delete(&input.id).await?;
    Ok(controller.envelope(resource))
}

/// Identifies the resource to delete
#[derive(Debug, Deserialize)]
struct DeleteInput {
    id: String,
}

/// Check the body against a schema before converting it
fn validated<T: DeserializeOwned>(
    schema: &Schema,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T> {
    let Json(body) = body.map_err(|rejection| FieldError::body(rejection.body_text()))?;
    if let Err(errors) = schema.validate(&body) {
        debug!(schema = schema.name(), count = errors.len(), "request body rejected");
        return Err(errors.into());
    }

    let input = serde_json::from_value(body).map_err(FieldError::body)?;
    Ok(input)
}
