pub const ASSISTANT_PERSONA: &str = "You are a helpful assistant.";

/// System prompt for chat-style providers, with the task context appended when there is one.
pub fn system(context: Option<&str>) -> String {
    match context {
        Some(context) => format!("{ASSISTANT_PERSONA} {context}"),
        None => ASSISTANT_PERSONA.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_alone_without_context() {
        assert_eq!(system(None), "You are a helpful assistant.");
    }

    #[test]
    fn context_follows_persona_after_a_space() {
        assert_eq!(
            system(Some("The user has the following tasks:")),
            "You are a helpful assistant. The user has the following tasks:"
        );
    }
}
