use serde::{Deserialize, Serialize};

/// Accept/reject outcome assigned to one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationVerdict {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            accepted: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Rejection reason, or an empty string for accepted verdicts.
    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}
