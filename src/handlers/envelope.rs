use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// A successful response, with the data keyed by the name of the resource
#[derive(Debug)]
pub(crate) struct Envelope<T> {
    key: &'static str,
    data: T,
}

impl<T> Envelope<T> {
    pub fn new(key: &'static str, data: T) -> Self {
        Self { key, data }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
