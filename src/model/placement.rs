//! Transient input and output of one order placement.

use crate::model::OrderId;
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`.
///
/// Absent fields deserialize as empty strings so that validation, not the
/// JSON extractor, decides how a missing id is reported.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub protein_id: String,
    #[serde(default)]
    pub broth_id: String,
}

impl PlaceOrderRequest {
    pub fn new(protein_id: impl Into<String>, broth_id: impl Into<String>) -> Self {
        Self {
            protein_id: protein_id.into(),
            broth_id: broth_id.into(),
        }
    }
}

/// Result of a successful placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub order_id: OrderId,
    pub description: String,
    pub image_url: String,
}
