//! Request types for the ask endpoint

use serde::{Deserialize, Serialize};

/// Ask request: a question against the session corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// The question to answer
    pub question: String,

    /// Credential for the completion service, forwarded as-is on each call
    /// and never stored
    pub api_key: String,
}

impl AskRequest {
    /// Create a new ask request
    pub fn new(question: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            api_key: api_key.into(),
        }
    }
}
