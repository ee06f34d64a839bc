use serde::{Deserialize, Serialize};

/// Verdict returned by the model for one email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Whether the email content is considered spam
    pub is_spam: bool,
    /// Brief explanation for the classification
    pub reason: String,
}

impl Prediction {
    pub fn new<S: Into<String>>(is_spam: bool, reason: S) -> Self {
        Self {
            is_spam,
            reason: reason.into(),
        }
    }

    pub fn spam<S: Into<String>>(reason: S) -> Self {
        Self::new(true, reason)
    }

    pub fn not_spam<S: Into<String>>(reason: S) -> Self {
        Self::new(false, reason)
    }

    /// Short label for the verdict
    pub fn label(&self) -> &'static str {
        if self.is_spam {
            "Spam"
        } else {
            "Not Spam"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_labels() {
        assert_eq!(Prediction::spam("phishing link").label(), "Spam");
        assert_eq!(Prediction::not_spam("newsletter").label(), "Not Spam");
    }

    #[test]
    fn test_prediction_serializes_with_wire_field_names() {
        let json = serde_json::to_value(Prediction::spam("urgent wire transfer")).unwrap();
        assert_eq!(json["is_spam"], true);
        assert_eq!(json["reason"], "urgent wire transfer");
    }
}
