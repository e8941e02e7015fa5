use serde::{Deserialize, Serialize};

/// Outcome of one greeting interaction, sent to the webview as the
/// `submit_name` return value and as the `greeting-shown` event payload.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingReply {
    pub valid: bool,
    pub message: String,
}
