// Greeting handler - classifies one prompt result and renders the reply.

use super::model::GreetingReply;

/// Reply shown when the prompt was cancelled or submitted empty.
pub const INVALID_NAME_MESSAGE: &str = "That's not a valid name.";

/// Build the reply for one prompt result.
///
/// `None` means the user dismissed the prompt without entering anything.
/// A name is valid when it is present and non-empty; nothing else is
/// checked, so a whitespace-only name greets as typed.
pub fn reply_for(name: Option<&str>) -> GreetingReply {
    match name {
        Some(name) if !name.is_empty() => GreetingReply {
            valid: true,
            message: format!("Hi, {}!", name),
        },
        _ => GreetingReply {
            valid: false,
            message: INVALID_NAME_MESSAGE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_input_greets() {
        let reply = reply_for(Some("Alice"));
        assert!(reply.valid);
        assert_eq!(reply.message, "Hi, Alice!");
    }

    #[test]
    fn test_empty_input_complains() {
        let reply = reply_for(Some(""));
        assert!(!reply.valid);
        assert_eq!(reply.message, "That's not a valid name.");
    }

    #[test]
    fn test_cancelled_prompt_complains() {
        let reply = reply_for(None);
        assert!(!reply.valid);
        assert_eq!(reply.message, "That's not a valid name.");
    }

    #[test]
    fn test_whitespace_name_passes_emptiness_check() {
        // The contract is a single emptiness/absence check, not trimming
        let reply = reply_for(Some("  "));
        assert!(reply.valid, "Whitespace is non-empty and must greet");
        assert_eq!(reply.message, "Hi,   !");
    }
}
