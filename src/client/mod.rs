//! HTTP client for the order service

mod error;
mod order_client;
mod traits;

pub use error::SubmissionError;
pub use order_client::OrderClient;
pub use traits::OrderClientTrait;

#[cfg(test)]
pub use traits::MockOrderClientTrait;
