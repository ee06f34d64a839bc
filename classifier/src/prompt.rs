//! Fixed instructions and response schema sent with every classification request.

use serde_json::{json, Value};

/// Build the instructional prompt embedding the email content
pub fn build_prompt(email_content: &str) -> String {
    format!(
        r#"
Analyze the following email content and determine if it is spam.
Your analysis should be based on common spam characteristics such as suspicious links, urgent requests for personal information, grammatical errors, unsolicited offers, and generic greetings.
Provide a clear 'true' or 'false' classification for 'is_spam' and a concise reason for your decision.

Email Content:
---
{email_content}
---
"#
    )
}

/// Schema constraining the model output to `{ is_spam: boolean, reason: string }`
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "is_spam": {
                "type": "BOOLEAN",
                "description": "Is the email content considered spam?"
            },
            "reason": {
                "type": "STRING",
                "description": "A brief explanation for the classification."
            }
        },
        "required": ["is_spam", "reason"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_content_between_delimiters() {
        let prompt = build_prompt("Congratulations, you won!");

        assert!(prompt.contains("determine if it is spam"));
        assert!(prompt.contains("---\nCongratulations, you won!\n---"));
    }

    #[test]
    fn test_prompt_keeps_content_verbatim() {
        let content = "  Hi {name},\n\nclick http://example.com  ";
        assert!(build_prompt(content).contains(content));
    }

    #[test]
    fn test_schema_requires_both_fields() {
        let schema = response_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["is_spam"]["type"], "BOOLEAN");
        assert_eq!(schema["properties"]["reason"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["is_spam", "reason"]));
    }
}
