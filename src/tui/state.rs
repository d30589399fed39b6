use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio_util::sync::CancellationToken;

use crate::error::ApplyError;
use crate::tui::providers::Provider;

pub const READY_STATUS: &str = "Ready. Select a model and press Enter.";
pub const FAILURE_STATUS: &str = "Error updating proxy.";

// ── Input actions ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Quit,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Enter => Some(Action::Confirm),
            _ => None,
        }
    }
}

// ── Effects handed back to the event loop ─────────────────────────────────────

/// One Apply-Config request to run in the background.
#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub id: u64,
    pub provider: Provider,
    pub cancel: CancellationToken,
}

/// Completion of an [`ApplyRequest`]. `Ok` carries the provider's display name.
#[derive(Debug)]
pub struct ApplyDone {
    pub id: u64,
    pub result: Result<String, ApplyError>,
}

#[derive(Debug)]
pub enum Effect {
    Apply(ApplyRequest),
    Quit,
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    pub providers: Vec<Provider>,
    pub cursor: usize,
    pub status: String,
    pub last_error: Option<ApplyError>,
    /// Id handed to the most recent Confirm. Completions with any other id are stale.
    pub latest_request: u64,
    in_flight: Option<CancellationToken>,
}

impl App {
    pub fn new(providers: Vec<Provider>) -> Self {
        App {
            providers,
            cursor: 0,
            status: READY_STATUS.to_string(),
            last_error: None,
            latest_request: 0,
            in_flight: None,
        }
    }

    pub fn selected_provider(&self) -> Option<&Provider> {
        self.providers.get(self.cursor)
    }

    pub fn is_applying(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn update(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Up => {
                self.navigate_up();
                None
            }
            Action::Down => {
                self.navigate_down();
                None
            }
            Action::Confirm => self.confirm().map(Effect::Apply),
            Action::Quit => Some(Effect::Quit),
        }
    }

    pub fn navigate_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.cursor + 1 < self.providers.len() {
            self.cursor += 1;
        }
    }

    /// Start applying the selected provider. Any request still in flight is
    /// cancelled so only the latest selection can land.
    pub fn confirm(&mut self) -> Option<ApplyRequest> {
        let selected = self.selected_provider()?.clone();
        self.status = format!("Switching to {}...", selected.display_name);

        if let Some(prev) = self.in_flight.take() {
            prev.cancel();
        }
        self.latest_request += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());

        Some(ApplyRequest {
            id: self.latest_request,
            provider: selected,
            cancel,
        })
    }

    pub fn complete(&mut self, done: ApplyDone) {
        if done.id != self.latest_request {
            tracing::debug!(id = done.id, latest = self.latest_request, "dropping stale apply result");
            return;
        }
        self.in_flight = None;
        match done.result {
            Ok(name) => {
                self.status = format!("Successfully switched to {name}");
                self.last_error = None;
            }
            Err(e) => {
                self.status = FAILURE_STATUS.to_string();
                self.last_error = Some(e);
            }
        }
    }
}
