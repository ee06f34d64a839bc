use crate::error::{ClassifierError, Result};
use crate::traits::SpamClassifier;
use crate::types::Prediction;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted outcome returned by [`MockClassifier`]
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Prediction(Prediction),
    RequestFailure(String),
    MalformedResponse(String),
}

impl MockOutcome {
    fn into_result(self) -> Result<Prediction> {
        match self {
            Self::Prediction(prediction) => Ok(prediction),
            Self::RequestFailure(message) => Err(ClassifierError::request(message)),
            Self::MalformedResponse(message) => Err(ClassifierError::malformed_response(message)),
        }
    }
}

/// Mock classifier for testing; outcomes are returned in the order queued
#[derive(Clone, Default)]
pub struct MockClassifier {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    submissions: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: MockOutcome) -> Self {
        self.outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(outcome);
        self
    }

    pub fn with_prediction(self, prediction: Prediction) -> Self {
        self.with_outcome(MockOutcome::Prediction(prediction))
    }

    pub fn with_request_failure<S: Into<String>>(self, message: S) -> Self {
        self.with_outcome(MockOutcome::RequestFailure(message.into()))
    }

    pub fn with_malformed_response<S: Into<String>>(self, message: S) -> Self {
        self.with_outcome(MockOutcome::MalformedResponse(message.into()))
    }

    /// Number of times `classify` was called
    pub fn call_count(&self) -> usize {
        self.submissions().len()
    }

    /// Inputs passed to `classify`, in call order
    pub fn submissions(&self) -> Vec<String> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SpamClassifier for MockClassifier {
    async fn classify(&self, email_content: &str) -> Result<Prediction> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(email_content.to_string());

        let next = self
            .outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        match next {
            Some(outcome) => outcome.into_result(),
            None => Err(ClassifierError::request("Mock outcome not queued")),
        }
    }
}
