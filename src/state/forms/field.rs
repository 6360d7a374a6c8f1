//! Form field value objects

use super::validation::{validate, Rule, ValidationError};

/// The five inputs of the order form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    CustomerName,
    Email,
    ItemDescription,
    Quantity,
    Price,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::CustomerName,
        FieldName::Email,
        FieldName::ItemDescription,
        FieldName::Quantity,
        FieldName::Price,
    ];

    /// Key used in the JSON payload
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::CustomerName => "customerName",
            FieldName::Email => "email",
            FieldName::ItemDescription => "itemDescription",
            FieldName::Quantity => "quantity",
            FieldName::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::CustomerName => "Customer Name",
            FieldName::Email => "Email",
            FieldName::ItemDescription => "Item Description",
            FieldName::Quantity => "Quantity",
            FieldName::Price => "Price",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::CustomerName | FieldName::ItemDescription => FieldKind::Text,
            FieldName::Email => FieldKind::Email,
            FieldName::Quantity => FieldKind::Integer,
            FieldName::Price => FieldKind::Decimal,
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            FieldName::CustomerName => &[Rule::Required, Rule::MinLength(2)],
            FieldName::Email => &[Rule::Required, Rule::Email],
            FieldName::ItemDescription => &[Rule::Required, Rule::MinLength(5)],
            FieldName::Quantity => {
                &[Rule::Required, Rule::MinInteger(1), Rule::MaxInteger(i32::MAX)]
            }
            FieldName::Price => &[Rule::Required, Rule::MinNumber(0.0)],
        }
    }
}

/// What kind of input a field accepts from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Integer,
    Decimal,
}

impl FieldKind {
    /// Whether `c` may be typed into a field currently holding `current`
    fn accepts(&self, c: char, current: &str) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::Email => !c.is_control() && !c.is_whitespace(),
            FieldKind::Integer => c.is_ascii_digit(),
            FieldKind::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
        }
    }
}

/// A single form field: its raw text, rules and cached validity
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    value: String,
    /// Set once the user has edited the field
    dirty: bool,
    error: Option<ValidationError>,
}

impl FormField {
    /// Create an empty field. Required fields start out invalid.
    pub fn new(name: FieldName) -> Self {
        let mut field = Self {
            name,
            value: String::new(),
            dirty: false,
            error: None,
        };
        field.revalidate();
        field
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Replace the value and recompute validity
    pub fn set_text(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
        self.revalidate();
    }

    /// Whether `c` may be typed at the end of the current value
    pub fn accepts(&self, c: char) -> bool {
        self.name.kind().accepts(c, &self.value)
    }

    /// Back to the pristine empty state
    pub fn clear(&mut self) {
        self.value.clear();
        self.dirty = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.error = validate(self.name.rules(), &self.value);
    }
}
