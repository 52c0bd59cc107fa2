use serde::{Deserialize, Serialize};

/// Verdict returned to the hook system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Block,
}

/// Output JSON for the Claude Code hook system. `reason` is only
/// serialized when blocking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookDecision {
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl HookDecision {
    pub fn approve() -> Self {
        HookDecision {
            decision: Decision::Approve,
            reason: None,
        }
    }

    pub fn block(reason: String) -> Self {
        HookDecision {
            decision: Decision::Block,
            reason: Some(reason),
        }
    }
}
