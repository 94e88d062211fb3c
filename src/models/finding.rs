use serde::{Deserialize, Serialize};

/// One heuristic pattern match against contract source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub pattern: String,
    pub explanation: String,
}

impl Finding {
    pub fn new(pattern: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            explanation: explanation.into(),
        }
    }
}
