//! Request lifecycle for one user: idle, loading, then a single result or error.

use crate::error::{ClassifierError, EMPTY_INPUT_MESSAGE};
use crate::traits::{SpamClassifier, TransitionCallback};
use crate::types::Prediction;

/// The one active interaction state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Loading,
    Success(Prediction),
    Error(String),
}

impl InteractionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Success(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Drives a [`SpamClassifier`] through the interaction lifecycle
pub struct InteractionController<C: SpamClassifier> {
    classifier: C,
    state: InteractionState,
    on_transition: Option<TransitionCallback>,
}

impl<C: SpamClassifier> InteractionController<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            state: InteractionState::Idle,
            on_transition: None,
        }
    }

    /// Observe every state change
    pub fn with_transition_callback(mut self, callback: TransitionCallback) -> Self {
        self.on_transition = Some(callback);
        self
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Whether a submission of `input` would be accepted right now
    pub fn can_submit(&self, input: &str) -> bool {
        !self.state.is_loading() && !input.is_empty()
    }

    /// Run one submission and return the resulting state.
    ///
    /// Blank input ends in the empty-input error without calling the
    /// classifier. Any previous outcome is cleared by the `Loading`
    /// transition before the classifier is invoked.
    pub async fn submit(&mut self, input: &str) -> &InteractionState {
        if self.state.is_loading() {
            tracing::warn!("Submission ignored while a request is in flight");
            return &self.state;
        }

        if input.trim().is_empty() {
            self.transition(InteractionState::Error(EMPTY_INPUT_MESSAGE.to_string()));
            return &self.state;
        }

        self.transition(InteractionState::Loading);

        let next = match self.classifier.classify(input).await {
            Ok(prediction) => InteractionState::Success(prediction),
            Err(ClassifierError::EmptyInput) => {
                InteractionState::Error(EMPTY_INPUT_MESSAGE.to_string())
            }
            Err(err) => InteractionState::Error(err.to_string()),
        };
        self.transition(next);

        &self.state
    }

    /// Return to idle, discarding any result or error
    pub fn reset(&mut self) {
        self.transition(InteractionState::Idle);
    }

    fn transition(&mut self, next: InteractionState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "Interaction state change");
        self.state = next;
        if let Some(callback) = &self.on_transition {
            callback(&self.state);
        }
    }
}
