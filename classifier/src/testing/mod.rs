pub mod mocks;

pub use mocks::{MockClassifier, MockOutcome};
