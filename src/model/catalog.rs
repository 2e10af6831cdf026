//! Catalog entries offered by the storefront.
//!
//! [`Broth`] and [`Protein`] implement [`ActorEntity`](actor_framework::ActorEntity)
//! in [`crate::catalog_actor`]; each kind lives in its own resource actor.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Broths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrothId(pub String);

impl From<&str> for BrothId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for BrothId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe identifier for Proteins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProteinId(pub String);

impl From<&str> for ProteinId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProteinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A soup base customers can pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broth {
    pub id: BrothId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub image_inactive: String,
    #[serde(default)]
    pub image_active: String,
}

impl Broth {
    /// Creates a Broth with only its identity and display name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: BrothId(id.into()),
            name: name.into(),
            description: String::new(),
            price: 0,
            image_inactive: String::new(),
            image_active: String::new(),
        }
    }
}

/// A topping protein customers can pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protein {
    pub id: ProteinId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub image_inactive: String,
    #[serde(default)]
    pub image_active: String,
}

impl Protein {
    /// Creates a Protein with only its identity and display name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProteinId(id.into()),
            name: name.into(),
            description: String::new(),
            price: 0,
            image_inactive: String::new(),
            image_active: String::new(),
        }
    }
}
