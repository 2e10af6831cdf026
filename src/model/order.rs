//! A placed order.
//!
//! The id is issued by the external allocator, never generated locally. The
//! record is composed once by the placement orchestrator, handed to the
//! persistence worker and never mutated afterwards.

use crate::model::{Broth, BrothId, Protein, ProteinId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Allocator-issued identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub broth_id: BrothId,
    pub protein_id: ProteinId,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl Order {
    /// Composes the order record from the allocated id and the resolved catalog entries.
    pub fn compose(id: OrderId, broth: &Broth, protein: &Protein) -> Self {
        Self {
            id,
            broth_id: broth.id.clone(),
            protein_id: protein.id.clone(),
            description: describe(broth, protein),
            image_url: String::new(),
        }
    }
}

/// Human-readable order description, e.g. `"Miso and Pork Ramen"`.
pub fn describe(broth: &Broth, protein: &Protein) -> String {
    format!("{} and {} Ramen", broth.name, protein.name)
}
