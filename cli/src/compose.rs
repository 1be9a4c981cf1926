//! Compose CLI abstraction — enables test doubles for the harness
//! orchestration tool.

use std::path::PathBuf;
use std::process::Output;

use anyhow::{Context, Result};

/// Abstraction over the compose-style orchestration tool.
///
/// Exactly two operations are consumed. The production implementation
/// delegates to the `docker` binary via [`tokio::process::Command`]; unit
/// tests substitute canned results.
#[allow(async_fn_in_trait)]
pub trait Compose {
    /// Stop and remove the harness environments.
    ///
    /// `force` removes them unconditionally, even while running or in an
    /// inconsistent state. What forced removal means is the tool's
    /// business, not ours.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    async fn teardown(&self, force: bool) -> Result<Output>;

    /// Start the two-environment harness, creating it if necessary. The
    /// staged playbook path is mounted into the control environment per
    /// the compose topology.
    ///
    /// `rebuild_images` forces an image rebuild before start.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    async fn bring_up(&self, rebuild_images: bool) -> Result<Output>;
}

/// Production implementation — shells out to `docker compose`.
pub struct DockerComposeCli {
    compose_file: PathBuf,
}

impl DockerComposeCli {
    #[must_use]
    pub fn new(compose_file: PathBuf) -> Self {
        Self { compose_file }
    }

    fn base_args(&self) -> Vec<String> {
        vec![
            "compose".to_string(),
            "-f".to_string(),
            self.compose_file.display().to_string(),
        ]
    }
}

impl Compose for DockerComposeCli {
    async fn teardown(&self, force: bool) -> Result<Output> {
        let mut args = self.base_args();
        args.push("down".to_string());
        args.push("--remove-orphans".to_string());
        if force {
            // Immediate kill instead of compose's graceful stop timeout.
            args.push("--timeout".to_string());
            args.push("0".to_string());
        }
        tokio::process::Command::new("docker")
            .args(&args)
            .output()
            .await
            .context("failed to run docker compose down")
    }

    async fn bring_up(&self, rebuild_images: bool) -> Result<Output> {
        let mut args = self.base_args();
        args.push("up".to_string());
        args.push("--detach".to_string());
        if rebuild_images {
            args.push("--build".to_string());
        }
        tokio::process::Command::new("docker")
            .args(&args)
            .output()
            .await
            .context("failed to run docker compose up")
    }
}
