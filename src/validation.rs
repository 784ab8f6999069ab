use jsonschema::{error::ValidationErrorKind, ValidationError, Validator};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Where the rejected value was found in the request
const BODY: &str = "body";

/// A compiled set of field rules that request bodies are checked against
pub struct Schema {
    name: &'static str,
    validator: Validator,
}

impl Schema {
    /// Compile a JSON schema definition
    pub fn compile(name: &'static str, definition: &str) -> Result<Self, SchemaError> {
        let definition: Value = serde_json::from_str(definition)
            .map_err(|source| SchemaError::Parse { name, source })?;
        let validator =
            jsonschema::validator_for(&definition).map_err(|error| SchemaError::Compile {
                name,
                reason: error.to_string(),
            })?;

        Ok(Self { name, validator })
    }

    /// The rules for creating or updating an event
    pub fn event() -> Result<Self, SchemaError> {
        Self::compile("event", include_str!("validation/event.create.json"))
    }

    /// The rules for creating or updating an NGO
    pub fn ngo() -> Result<Self, SchemaError> {
        Self::compile("ngo", include_str!("validation/ngo.create.json"))
    }

    /// The rules for deleting any resource
    pub fn delete() -> Result<Self, SchemaError> {
        Self::compile("delete", include_str!("validation/delete.json"))
    }

    /// The name of the schema
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check a request body, collecting every violation
    pub fn validate(&self, body: &Value) -> Result<(), Vec<FieldError>> {
        let errors = self
            .validator
            .iter_errors(body)
            .map(FieldError::from)
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A single rejected field in a request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    /// Where in the request the field lives
    pub location: &'static str,
    /// The dotted path to the field, empty for the whole body
    pub path: String,
    /// What was wrong with it
    pub message: String,
}

impl FieldError {
    /// An error affecting the entire body
    pub fn body(message: impl ToString) -> Self {
        Self {
            location: BODY,
            path: String::new(),
            message: message.to_string(),
        }
    }
}

impl From<ValidationError<'_>> for FieldError {
    fn from(error: ValidationError<'_>) -> Self {
        let mut path = dotted(&error.instance_path.to_string());

        // point at the missing field rather than the object it is missing from
        if let ValidationErrorKind::Required { property } = &error.kind {
            if let Some(property) = property.as_str() {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(property);
            }
        }

        Self {
            location: BODY,
            path,
            message: error.to_string(),
        }
    }
}

/// Convert a JSON pointer into a dotted field path
fn dotted(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Errors that can occur while loading a schema
#[derive(Debug)]
pub enum SchemaError {
    /// The definition is not valid JSON
    Parse {
        name: &'static str,
        source: serde_json::Error,
    },
    /// The definition is not a valid schema
    Compile { name: &'static str, reason: String },
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { name, .. } => write!(f, "schema {name} is not valid JSON"),
            Self::Compile { name, reason } => write!(f, "schema {name} is invalid: {reason}"),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Compile { .. } => None,
        }
    }
}
