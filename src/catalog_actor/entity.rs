//! [`ActorEntity`] implementations for the catalog types.
//!
//! Catalog entries are created with their own id and a non-empty name; the
//! actor rejects anything else before it reaches the store.

use super::CatalogError;
use crate::model::{Broth, BrothId, Protein, ProteinId};
use actor_framework::ActorEntity;

fn validate(kind: &str, id: &str, name: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::ValidationError(format!("{kind} id must not be empty")));
    }
    if name.trim().is_empty() {
        return Err(CatalogError::ValidationError(format!(
            "{kind} {id} must have a name"
        )));
    }
    Ok(())
}

impl ActorEntity for Broth {
    type Id = BrothId;
    type Create = Broth;
    type Error = CatalogError;

    fn from_create_params(params: Broth) -> Result<Self, Self::Error> {
        Ok(params)
    }

    fn id(&self) -> &BrothId {
        &self.id
    }

    fn on_create(&mut self) -> Result<(), Self::Error> {
        validate("broth", &self.id.0, &self.name)
    }
}

impl ActorEntity for Protein {
    type Id = ProteinId;
    type Create = Protein;
    type Error = CatalogError;

    fn from_create_params(params: Protein) -> Result<Self, Self::Error> {
        Ok(params)
    }

    fn id(&self) -> &ProteinId {
        &self.id
    }

    fn on_create(&mut self) -> Result<(), Self::Error> {
        validate("protein", &self.id.0, &self.name)
    }
}
