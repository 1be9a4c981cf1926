//! Lifecycle driver — stage the playbook, then dispatch exactly one
//! orchestration action.

use anyhow::Result;

use crate::cleanup::CleanupGuard;
use crate::cli::Config;
use crate::compose::Compose;
use crate::error::Error;
use crate::output::OutputContext;
use crate::paths::HarnessPaths;
use crate::{assets, stage};

/// Run one validated invocation end to end.
///
/// Either staging fully completes and the compose tool is invoked, or the
/// run aborts before any orchestration call. Dispatch priority: `rebuild`
/// beats `copy_only` beats neither.
///
/// # Errors
///
/// Propagates the typed staging taxonomy unchanged; a non-zero status
/// from the compose collaborator becomes an error carrying its stderr.
pub async fn run(
    config: &Config,
    paths: &HarnessPaths,
    compose: &impl Compose,
    guard: &CleanupGuard,
    out: &OutputContext,
) -> Result<()> {
    assets::seed_harness_dir(paths)?;

    if !config.playbook_dir.is_dir() {
        return Err(Error::MissingDirectory(format!(
            "playbook directory {} does not exist",
            config.playbook_dir.display()
        ))
        .into());
    }

    out.step(&format!("Staging {}", config.playbook_dir.display()));
    let staged = stage::stage(config, paths)?;

    let force = config.rebuild || config.copy_only;
    out.step(if config.rebuild {
        "Rebuilding harness..."
    } else {
        "Restarting harness..."
    });
    let down = compose.teardown(force).await?;
    ensure_success("teardown", &down)?;

    let up = compose.bring_up(config.rebuild).await?;
    ensure_success("bring-up", &up)?;

    // The running harness owns the staged volume from here on.
    guard.disarm();

    out.success(&format!(
        "Harness is up; playbook staged at {}",
        staged.display()
    ));
    Ok(())
}

fn ensure_success(op: &str, output: &std::process::Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("harness {op} failed: {}", stderr.trim())
}
