use crate::decision::HookDecision;
use anyhow::Result;

/// Marker substring that identifies real compiler errors in type-check
/// output (tsc diagnostics look like "error TS2345: ...").
pub const ERROR_MARKER: &str = "error TS";

/// Prefix for the block reason shown to the agent.
pub const BLOCK_PREFIX: &str = "Type errors detected. Fix these before stopping.";

/// Reports pending working-tree changes in porcelain form.
/// Empty output means a clean tree.
pub trait StatusProvider {
    fn status(&self) -> Result<String>;
}

/// One type-check invocation: whether it exited zero, and its combined
/// stdout+stderr text.
#[derive(Debug, Clone)]
pub struct CheckRun {
    pub ok: bool,
    pub output: String,
}

/// Runs the type checker. The primary command may fail to spawn or exit
/// non-zero; either triggers the fallback. The fallback never errors,
/// it just yields whatever text it produced (possibly none).
pub trait TypeChecker {
    fn primary(&self) -> Result<CheckRun>;
    fn fallback(&self) -> CheckRun;
}

/// The stop-gate decision procedure.
///
/// Clean tree -> approve without type-checking. Dirty tree -> run the
/// type checker and block only if its output contains the error marker.
/// Subprocess exit codes from the type checker never become process
/// errors; only the text matters. A checker that silently failed to run
/// is indistinguishable from one that found nothing, and both approve.
pub fn evaluate(status: &dyn StatusProvider, checker: &dyn TypeChecker) -> Result<HookDecision> {
    let git_status = status.status()?;
    if git_status.trim().is_empty() {
        tracing::debug!("working tree clean, skipping type check");
        return Ok(HookDecision::approve());
    }

    let run = match checker.primary() {
        Ok(run) if run.ok => run,
        Ok(run) => {
            tracing::debug!(output_len = run.output.len(), "primary check failed, falling back");
            checker.fallback()
        }
        Err(err) => {
            tracing::debug!(%err, "primary check did not run, falling back");
            checker.fallback()
        }
    };

    if !run.output.trim().is_empty() && run.output.contains(ERROR_MARKER) {
        return Ok(HookDecision::block(format!(
            "{}\n\n{}",
            BLOCK_PREFIX, run.output
        )));
    }

    Ok(HookDecision::approve())
}
