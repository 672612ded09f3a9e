//! Prompt template for persona replies.

/// Wraps retrieved timeline excerpts around the user's question. The
/// persona's own system prompt supplies the identity; this template only
/// supplies grounding.
pub const RESPONSE_PROMPT: &str = "\
Provide a direct response mimicking my style based on the timeline content:
{context}

and include only the response itself without any additional text.

---

Answer the question based on the above context: {question}";

/// Fill the response template.
pub fn format_response_prompt(context: &str, question: &str) -> String {
    RESPONSE_PROMPT
        .replace("{context}", context)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_filled() {
        let prompt = format_response_prompt("tweet one\n\n---\n\ntweet two", "what's new?");

        assert!(prompt.contains("tweet one"));
        assert!(prompt.contains("what's new?"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{question}"));
    }
}
