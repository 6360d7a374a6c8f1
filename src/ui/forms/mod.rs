//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `order_form`: The order entry form

mod field_renderer;
mod order_form;

pub use order_form::draw_order_form;
