use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod decision;
mod gate;
mod git;
mod input;
mod typecheck;

use git::GitStatus;
use input::HookInput;
use typecheck::TscChecker;

fn init_tracing() {
    // Logs go to stderr; stdout is reserved for the decision JSON.
    let filter = EnvFilter::try_from_env("TSGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let input = read_input()?;
    tracing::debug!(
        event = input.hook_event_name.as_deref().unwrap_or("unknown"),
        session = input.session_id.as_deref().unwrap_or("unknown"),
        "stop hook invoked"
    );

    let cwd = working_dir(&input)?;
    let status = GitStatus::new(cwd.clone());
    let checker = TscChecker::new(cwd);

    let decision = gate::evaluate(&status, &checker)?;
    tracing::debug!(?decision, "gate decided");

    #[allow(clippy::print_stdout)]
    {
        println!("{}", serde_json::to_string(&decision)?);
    }

    Ok(())
}

fn read_input() -> Result<HookInput> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let input: HookInput = serde_json::from_str(&buffer).context("invalid hook input JSON")?;
    Ok(input)
}

/// Where to run git and the type checker: the event's `cwd` when given,
/// the process working directory otherwise.
fn working_dir(input: &HookInput) -> Result<PathBuf> {
    match &input.cwd {
        Some(cwd) => Ok(PathBuf::from(cwd)),
        None => std::env::current_dir().context("no cwd in hook input or environment"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_dir_prefers_input_cwd() {
        let input: HookInput = serde_json::from_str(r#"{"cwd":"/srv/project"}"#).unwrap();
        assert_eq!(working_dir(&input).unwrap(), PathBuf::from("/srv/project"));
    }

    #[test]
    fn test_working_dir_falls_back_to_process_cwd() {
        let input: HookInput = serde_json::from_str("{}").unwrap();
        assert_eq!(
            working_dir(&input).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
