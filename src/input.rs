use serde::Deserialize;

/// Input JSON from the Claude Code hook system.
///
/// The gate only needs this to parse; every field is optional. `cwd`
/// selects where subprocesses run, the rest feed debug logging.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub hook_event_name: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub transcript_path: Option<String>,
}
