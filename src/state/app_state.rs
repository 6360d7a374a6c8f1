//! Application state definitions

use super::forms::{Form, OrderForm};
use crate::client::SubmissionError;
use serde::{Deserialize, Serialize};

/// Message shown for every kind of submission failure
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Failed to create the order. Check the log for details.";

/// Where the controller is in the submit workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Order data as sent to the order service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub email: String,
    pub item_description: String,
    /// None while the field is empty or out of range; such drafts are never sent
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

/// Acknowledgment returned by the order service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub customer_name: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Feedback of the latest submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    /// True exactly while a request is in flight
    pub is_submitting: bool,
    pub last_error: Option<String>,
    /// Raw transport or backend detail behind `last_error`
    pub last_error_detail: Option<String>,
    pub last_success_message: Option<String>,
}

impl SubmissionState {
    fn clear_feedback(&mut self) {
        self.last_error = None;
        self.last_error_detail = None;
        self.last_success_message = None;
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: OrderForm,
    pub submission: SubmissionState,
    pub phase: Phase,
    /// Set by a submit attempt so validation messages become visible
    pub touched: bool,
    /// Result of the startup health probe, None until known
    pub backend_reachable: Option<bool>,
}

impl AppState {
    /// Start a submit attempt.
    ///
    /// Returns the draft to send when the form is valid. An attempt while a
    /// request is already in flight is ignored.
    pub fn begin_submission(&mut self) -> Option<OrderDraft> {
        if self.submission.is_submitting {
            return None;
        }

        self.submission.clear_feedback();
        self.touched = true;

        if !self.form.is_valid() {
            self.phase = Phase::Idle;
            return None;
        }

        self.submission.is_submitting = true;
        self.phase = Phase::Submitting;
        Some(self.form.snapshot())
    }

    /// Apply the single outcome of an in-flight submission
    pub fn complete_submission(&mut self, outcome: Result<OrderConfirmation, SubmissionError>) {
        self.submission.is_submitting = false;

        match outcome {
            Ok(confirmation) => {
                self.submission.last_success_message = Some(format!(
                    "Order for {} created successfully!",
                    confirmation.customer_name
                ));
                self.form.reset();
                self.touched = false;
                self.phase = Phase::Success;
            }
            Err(err) => {
                self.submission.last_error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
                self.submission.last_error_detail = Some(err.to_string());
                self.phase = Phase::Failed;
            }
        }
    }

    /// Leave a terminal phase once the user edits again
    fn mark_edited(&mut self) {
        if matches!(self.phase, Phase::Success | Phase::Failed) {
            self.phase = Phase::Idle;
        }
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    pub fn form_input_char(&mut self, c: char) {
        if self.form.input_char(c) {
            self.mark_edited();
        }
    }

    pub fn form_backspace(&mut self) {
        if self.form.backspace() {
            self.mark_edited();
        }
    }

    /// Whether a field's validation message should be displayed
    pub fn show_field_error(&self, dirty: bool) -> bool {
        self.touched || dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;

    fn valid_state() -> AppState {
        let mut state = AppState::default();
        state.form.set_field(FieldName::CustomerName, "Al");
        state.form.set_field(FieldName::Email, "a@b.com");
        state.form.set_field(FieldName::ItemDescription, "Widget set");
        state.form.set_field(FieldName::Quantity, "1");
        state.form.set_field(FieldName::Price, "9.99");
        state
    }

    fn confirmation(name: &str) -> OrderConfirmation {
        OrderConfirmation {
            customer_name: name.to_string(),
            id: Some(42),
            status: None,
            message: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.submission, SubmissionState::default());
        assert!(!state.touched);
        assert!(state.backend_reachable.is_none());
    }

    #[test]
    fn test_invalid_form_stays_idle_and_touches() {
        let mut state = AppState::default();
        assert!(state.begin_submission().is_none());
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.touched);
        assert!(!state.submission.is_submitting);
    }

    #[test]
    fn test_valid_form_starts_submitting() {
        let mut state = valid_state();
        let draft = state.begin_submission().unwrap();
        assert_eq!(draft.customer_name, "Al");
        assert_eq!(state.phase, Phase::Submitting);
        assert!(state.submission.is_submitting);
    }

    #[test]
    fn test_second_attempt_while_in_flight_is_ignored() {
        let mut state = valid_state();
        assert!(state.begin_submission().is_some());
        assert!(state.begin_submission().is_none());
        assert_eq!(state.phase, Phase::Submitting);
    }

    #[test]
    fn test_success_resets_form() {
        let mut state = valid_state();
        state.begin_submission();
        state.complete_submission(Ok(confirmation("Al")));

        assert_eq!(state.phase, Phase::Success);
        assert!(!state.submission.is_submitting);
        assert!(!state.touched);
        assert_eq!(
            state.submission.last_success_message.as_deref(),
            Some("Order for Al created successfully!")
        );
        assert_eq!(state.form.snapshot(), OrderDraft::default());
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut state = valid_state();
        let sent = state.begin_submission().unwrap();
        state.complete_submission(Err(SubmissionError::Backend {
            status: 500,
            detail: "boom".to_string(),
        }));

        assert_eq!(state.phase, Phase::Failed);
        assert!(!state.submission.is_submitting);
        assert_eq!(
            state.submission.last_error.as_deref(),
            Some(SUBMISSION_FAILED_MESSAGE)
        );
        assert!(state
            .submission
            .last_error_detail
            .as_deref()
            .is_some_and(|d| d.contains("500")));
        assert_eq!(state.form.snapshot(), sent);
    }

    #[test]
    fn test_new_attempt_clears_previous_feedback() {
        let mut state = valid_state();
        state.begin_submission();
        state.complete_submission(Err(SubmissionError::Transport("refused".to_string())));

        state.begin_submission();
        assert!(state.submission.last_error.is_none());
        assert!(state.submission.last_error_detail.is_none());
    }

    #[test]
    fn test_edit_after_failure_returns_to_idle() {
        let mut state = valid_state();
        state.begin_submission();
        state.complete_submission(Err(SubmissionError::Transport("refused".to_string())));

        state.form_input_char('x');
        assert_eq!(state.phase, Phase::Idle);
        // Feedback stays visible until the next attempt
        assert!(state.submission.last_error.is_some());
    }

    #[test]
    fn test_rejected_char_does_not_change_phase() {
        let mut state = valid_state();
        state.begin_submission();
        state.complete_submission(Ok(confirmation("Al")));

        state.form.active_field_index = 3; // quantity
        state.form_input_char('z');
        assert_eq!(state.phase, Phase::Success);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = valid_state().form.snapshot();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customerName": "Al",
                "email": "a@b.com",
                "itemDescription": "Widget set",
                "quantity": 1,
                "price": 9.99
            })
        );
    }

    #[test]
    fn test_empty_draft_serializes_nulls() {
        let json = serde_json::to_value(OrderDraft::default()).unwrap();
        assert_eq!(json["quantity"], serde_json::Value::Null);
        assert_eq!(json["price"], serde_json::Value::Null);
    }

    #[test]
    fn test_confirmation_ignores_unknown_fields() {
        let json = r#"{"customerName": "Al", "id": 42, "extra": true}"#;
        let parsed: OrderConfirmation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, confirmation("Al"));
    }

    #[test]
    fn test_confirmation_requires_customer_name() {
        let json = r#"{"status": "success"}"#;
        assert!(serde_json::from_str::<OrderConfirmation>(json).is_err());
    }
}
