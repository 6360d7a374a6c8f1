//! Form domain layer
//!
//! Type-safe field values, validation rules and the order form model.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{Form, OrderForm};
pub use validation::ValidationError;
