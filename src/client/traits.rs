//! Trait abstraction for the order client to enable mocking in tests

use super::SubmissionError;
use crate::state::{OrderConfirmation, OrderDraft};
use async_trait::async_trait;

/// Operations the form needs from the order service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderClientTrait: Send + Sync {
    /// Send one create-order request. Never retries.
    async fn create_order(&self, draft: &OrderDraft)
        -> Result<OrderConfirmation, SubmissionError>;

    /// Check whether the order service answers its health endpoint
    async fn check_health(&self) -> bool;
}
