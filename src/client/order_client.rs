//! reqwest-based client for the order service
//!
//! One POST per submission, one outcome per POST. Timeouts are left to the
//! transport defaults and nothing is retried.

use super::{OrderClientTrait, SubmissionError};
use crate::config::FormConfig;
use crate::state::{OrderConfirmation, OrderDraft};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Client for the create-order and health endpoints
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: Client,
    orders_url: String,
    health_url: String,
}

impl OrderClient {
    /// Build a client for the endpoints named in the config
    pub fn new(config: &FormConfig) -> Result<Self> {
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            orders_url: config.orders_url(),
            health_url: config.health_url(),
        })
    }

    pub fn orders_url(&self) -> &str {
        &self.orders_url
    }
}

#[async_trait]
impl OrderClientTrait for OrderClient {
    async fn create_order(
        &self,
        draft: &OrderDraft,
    ) -> Result<OrderConfirmation, SubmissionError> {
        info!("Sending order for {} to {}", draft.customer_name, self.orders_url);

        let response = self
            .http
            .post(&self.orders_url)
            .header(CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Order service rejected the order with {status}");
            return Err(SubmissionError::Backend {
                status: status.as_u16(),
                detail: body,
            });
        }

        let confirmation: OrderConfirmation =
            serde_json::from_str(&body).map_err(|e| SubmissionError::Decode(e.to_string()))?;
        debug!("Order confirmed: {confirmation:?}");
        Ok(confirmation)
    }

    async fn check_health(&self) -> bool {
        match self.http.get(&self.health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {e}");
                false
            }
        }
    }
}
