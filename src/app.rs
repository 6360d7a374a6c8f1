//! Application controller: key handling and the submit workflow

use crate::client::{OrderClientTrait, SubmissionError};
use crate::state::{AppState, OrderConfirmation};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type SubmissionOutcome = Result<OrderConfirmation, SubmissionError>;

/// Upper bound for the startup health probe. Submissions have no timeout.
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Order service client, shared with in-flight submissions
    client: Arc<dyn OrderClientTrait>,
    /// Endpoint shown in the status bar
    pub orders_url: String,
    /// Outcomes of spawned submissions
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app and probe the order service once
    pub async fn new(client: Arc<dyn OrderClientTrait>, orders_url: String) -> Self {
        let mut app = Self::with_client(client, orders_url);

        let reachable = tokio::time::timeout(HEALTH_PROBE_TIMEOUT, app.client.check_health())
            .await
            .unwrap_or(false);
        if !reachable {
            warn!("Order service is not reachable at {}", app.orders_url);
        }
        app.state.backend_reachable = Some(reachable);

        app
    }

    /// Create the app without contacting the order service
    pub fn with_client(client: Arc<dyn OrderClientTrait>, orders_url: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client,
            orders_url,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit_button = self.state.form.is_submit_button_active();
        // Windows reports AltGr as CONTROL|ALT, so that combination still types
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter if on_submit_button => self.submit(),
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char(c) if !ctrl => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate and, if valid, send the current draft in the background.
    ///
    /// The outcome comes back through `poll_submissions`.
    pub fn submit(&mut self) {
        let Some(draft) = self.state.begin_submission() else {
            if !self.state.submission.is_submitting {
                debug!("Submit blocked: form is invalid");
            }
            return;
        };

        info!("Form submitted for {}", draft.customer_name);

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.create_order(&draft).await;
            // Receiver lives as long as the app
            let _ = tx.send(outcome);
        });
    }

    /// Apply any submission outcomes that have arrived
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        match &outcome {
            Ok(confirmation) => info!("Order created for {}", confirmation.customer_name),
            Err(e) => warn!("Order submission failed: {e}"),
        }
        self.state.complete_submission(outcome);
    }
}
