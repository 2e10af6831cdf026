//! # HTTP Surface
//!
//! Routes, all gated by the `x-api-key` header:
//!
//! | Method | Path           | Success                              |
//! |--------|----------------|--------------------------------------|
//! | GET    | `/broths`      | `200` list of broths                 |
//! | GET    | `/proteins`    | `200` list of proteins               |
//! | POST   | `/orders`      | `201` with `Location: /orders/{id}`  |
//! | GET    | `/orders/{id}` | `200` the stored order               |
//!
//! A placed order shows up under `/orders/{id}` once the background write
//! has completed.

pub mod error;

pub use error::ApiError;

use crate::allocator::http::API_KEY_HEADER;
use crate::clients::{BrothClient, OrderClient, ProteinClient};
use crate::model::{Broth, Order, OrderId, PlaceOrderRequest, Protein};
use crate::placement::OrderPlacement;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ApiState {
    placement: OrderPlacement,
    broths: BrothClient,
    proteins: ProteinClient,
    orders: OrderClient,
    api_key: Arc<Secret<String>>,
    image_placeholder: Arc<str>,
}

impl ApiState {
    pub fn new(
        placement: OrderPlacement,
        broths: BrothClient,
        proteins: ProteinClient,
        orders: OrderClient,
        api_key: Secret<String>,
        image_placeholder: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            placement,
            broths,
            proteins,
            orders,
            api_key: Arc::new(api_key),
            image_placeholder: image_placeholder.into(),
        }
    }
}

/// Body of a `201 Created` answer to `POST /orders`.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub id: OrderId,
    pub description: String,
    pub image: String,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/broths", get(list_broths))
        .route("/proteins", get(list_proteins))
        .route("/orders", post(place_order))
        .route("/orders/{id}", get(get_order))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
}

async fn require_api_key(State(state): State<ApiState>, request: Request, next: Next) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if provided.trim().is_empty() {
        warn!(path = %request.uri().path(), "Request without api key");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "x-api-key header missing" })),
        )
            .into_response();
    }
    if provided != state.api_key.expose_secret().as_str() {
        warn!(path = %request.uri().path(), "Request with wrong api key");
        return (StatusCode::FORBIDDEN, Json(json!({ "message": "Forbidden" }))).into_response();
    }

    next.run(request).await
}

async fn list_broths(State(state): State<ApiState>) -> Result<Json<Vec<Broth>>, ApiError> {
    Ok(Json(state.broths.list_broths().await?))
}

async fn list_proteins(State(state): State<ApiState>) -> Result<Json<Vec<Protein>>, ApiError> {
    Ok(Json(state.proteins.list_proteins().await?))
}

async fn place_order(
    State(state): State<ApiState>,
    body: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // An unreadable body is treated like one with both ids missing.
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable order body");
            PlaceOrderRequest::default()
        }
    };

    // Cancels outstanding lookups if the client goes away mid-request.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let placed = state.placement.place_order(request, &cancel).await?;

    let image = if placed.image_url.is_empty() {
        state.image_placeholder.to_string()
    } else {
        placed.image_url
    };
    let location = format!("/orders/{}", placed.order_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrderCreated {
            id: placed.order_id,
            description: placed.description,
            image,
        }),
    ))
}

async fn get_order(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get_order(&OrderId(id)).await?))
}
