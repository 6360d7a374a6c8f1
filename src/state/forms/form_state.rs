//! Order form state: field values, validity and keyboard focus

use super::field::{FieldName, FormField};
use super::validation::{parse_integer, parse_number, ValidationError};
use crate::state::OrderDraft;
use tracing::debug;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focus index of the submit button, after the five inputs
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

/// The editable order form
#[derive(Debug, Clone)]
pub struct OrderForm {
    fields: [FormField; 5],
    pub active_field_index: usize,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.map(FormField::new),
            active_field_index: 0,
        }
    }

    fn index_of(name: FieldName) -> usize {
        match name {
            FieldName::CustomerName => 0,
            FieldName::Email => 1,
            FieldName::ItemDescription => 2,
            FieldName::Quantity => 3,
            FieldName::Price => 4,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[Self::index_of(name)]
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    /// Replace one field's raw text. Only that field is revalidated.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        let field = &mut self.fields[Self::index_of(name)];
        field.set_text(value.into());
        debug!(field = name.key(), valid = field.is_valid(), "Field updated");
    }

    /// True iff every field satisfies all of its rules
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FormField::is_valid)
    }

    pub fn field_error(&self, name: FieldName) -> Option<&ValidationError> {
        self.field(name).error()
    }

    /// Copy of the current values in wire form
    pub fn snapshot(&self) -> OrderDraft {
        OrderDraft {
            customer_name: self.field(FieldName::CustomerName).as_text().to_string(),
            email: self.field(FieldName::Email).as_text().to_string(),
            item_description: self.field(FieldName::ItemDescription).as_text().to_string(),
            quantity: parse_integer(self.field(FieldName::Quantity).as_text()),
            price: parse_number(self.field(FieldName::Price).as_text()),
        }
    }

    /// Clear every field and move focus back to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Returns true if the submit button has focus
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// The focused input, or None when the submit button has focus
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Type a character into the focused field.
    /// Returns false if nothing changed.
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        let field = self.field(name);
        if !field.accepts(c) {
            return false;
        }
        let value = format!("{}{c}", field.as_text());
        self.set_field(name, value);
        true
    }

    /// Delete the last character of the focused field.
    /// Returns false if nothing changed.
    pub fn backspace(&mut self) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        let mut value = self.field(name).as_text().to_string();
        if value.pop().is_none() {
            return false;
        }
        self.set_field(name, value);
        true
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for OrderForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // five inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
