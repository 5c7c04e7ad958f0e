use crate::{Error, Result, recipes::Recipe};
use tracing::{debug, info};

/// The one-of-four render states of a session. Results and error text live
/// inside their variants, so a recipe list can never coexist with an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Success(Vec<Recipe>),
    Error(String),
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success(_) => "Success",
            Self::Error(_) => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    GenerateRequested,
    GenerationSucceeded(Vec<Recipe>),
    GenerationFailed(String),
}

impl SessionEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GenerateRequested => "GenerateRequested",
            Self::GenerationSucceeded(_) => "GenerationSucceeded",
            Self::GenerationFailed(_) => "GenerationFailed",
        }
    }
}

pub struct SessionStateMachine {
    state: SessionState,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn current_state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// A new generation may start from any settled state but never while one
    /// is outstanding. Failures may be recorded from any state, because
    /// local validation errors skip the Loading phase entirely.
    pub fn transition(&mut self, event: SessionEvent) -> Result<()> {
        let from = self.state.label();
        debug!(state = from, event = event.label(), "Processing session event");

        let next = match (&self.state, event) {
            (
                SessionState::Idle | SessionState::Success(_) | SessionState::Error(_),
                SessionEvent::GenerateRequested,
            ) => SessionState::Loading,
            (SessionState::Loading, SessionEvent::GenerationSucceeded(recipes)) => {
                SessionState::Success(recipes)
            }
            (_, SessionEvent::GenerationFailed(message)) => SessionState::Error(message),
            (_, event) => {
                return Err(Error::InvalidTransition {
                    current: from.to_string(),
                    requested: event.label().to_string(),
                });
            }
        };

        info!(from = from, to = next.label(), "Session state transition");
        self.state = next;
        Ok(())
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
