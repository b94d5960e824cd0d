use std::path::Path;

/// The document does not conform to the schema.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SchemaViolation {
    pub message: String,
}

impl SchemaViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validates an output document against a schema file.
///
/// Any error, including a schema that cannot itself be loaded, is reported
/// as a [`SchemaViolation`] and recorded as a failed check.
pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &Path, document: &[u8]) -> Result<(), SchemaViolation>;
}

impl<F> SchemaValidator for F
where
    F: Fn(&Path, &[u8]) -> Result<(), SchemaViolation> + Send + Sync,
{
    fn validate(&self, schema: &Path, document: &[u8]) -> Result<(), SchemaViolation> {
        self(schema, document)
    }
}
