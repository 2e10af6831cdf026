//! # HTTP Allocator Client
//!
//! Calls the remote id service: one `POST` with an empty body and the
//! `x-api-key` header, expecting `{"orderId": "..."}` back.
use super::{AllocatorError, OrderIdAllocator};
use crate::config::AllocatorConfig;
use crate::model::OrderId;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Deserialize)]
struct GenerateIdResponse {
    #[serde(rename = "orderId")]
    order_id: Option<String>,
}

/// [`OrderIdAllocator`] backed by the remote id service.
pub struct HttpOrderIdAllocator {
    client: Client,
    endpoint: String,
    api_key: Secret<String>,
    timeout: Duration,
}

impl HttpOrderIdAllocator {
    pub fn new(config: &AllocatorConfig) -> Result<Self, AllocatorError> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AllocatorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: Secret::new(config.api_key.expose_secret().clone()),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrderIdAllocator for HttpOrderIdAllocator {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn allocate_order_id(&self) -> Result<OrderId, AllocatorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.expose_secret().as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AllocatorError::TimedOut(self.timeout)
                } else {
                    AllocatorError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Allocator rejected request");
            return Err(AllocatorError::Status(status.as_u16()));
        }

        let body: GenerateIdResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AllocatorError::TimedOut(self.timeout)
            } else {
                AllocatorError::Malformed(e.to_string())
            }
        })?;

        match body.order_id {
            Some(id) if !id.trim().is_empty() => {
                debug!(order_id = %id, "Allocated order id");
                Ok(OrderId(id))
            }
            Some(_) => Err(AllocatorError::Malformed("orderId is empty".into())),
            None => Err(AllocatorError::Malformed("orderId is missing".into())),
        }
    }
}
