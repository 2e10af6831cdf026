//! Error types for the catalog actors.

use thiserror::Error;

/// Errors that can occur while seeding or reading the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No broth with the requested id exists.
    #[error("Broth not found: {0}")]
    BrothNotFound(String),

    /// No protein with the requested id exists.
    #[error("Protein not found: {0}")]
    ProteinNotFound(String),

    /// A catalog entry with the same id was already seeded.
    #[error("Catalog entry already exists: {0}")]
    AlreadyExists(String),

    /// The catalog entry provided is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}

impl From<actor_framework::FrameworkError> for CatalogError {
    fn from(e: actor_framework::FrameworkError) -> Self {
        use actor_framework::FrameworkError;
        match e {
            FrameworkError::AlreadyExists(id) => CatalogError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
