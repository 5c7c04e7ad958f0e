mod fsm;

pub use fsm::{SessionEvent, SessionState, SessionStateMachine};

use crate::{Error, Result, pantry::IngredientList, recipes::Recipe};

/// Session-scoped state: the pantry plus the outcome of the last generation.
/// Nothing here outlives the process.
pub struct Session {
    pub ingredients: IngredientList,
    machine: SessionStateMachine,
}

impl Session {
    pub fn new() -> Self {
        Self::with_ingredients(IngredientList::new())
    }

    pub fn with_ingredients(ingredients: IngredientList) -> Self {
        Self {
            ingredients,
            machine: SessionStateMachine::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        self.machine.current_state()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.is_loading()
    }

    /// Validates the pantry and moves to Loading. The caller performs the
    /// request and reports back through `complete` or `fail`.
    pub fn begin_generation(&mut self) -> Result<()> {
        if self.ingredients.is_empty() {
            return Err(Error::validation("Please add at least one ingredient."));
        }
        self.machine.transition(SessionEvent::GenerateRequested)
    }

    pub fn complete(&mut self, recipes: Vec<Recipe>) -> Result<()> {
        self.machine
            .transition(SessionEvent::GenerationSucceeded(recipes))
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<()> {
        self.machine
            .transition(SessionEvent::GenerationFailed(message.into()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
