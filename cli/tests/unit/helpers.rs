//! Shared test helpers: canned `Compose` implementations and output
//! constructors.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;
use playpen_cli::compose::Compose;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we
/// shift. On Windows `ExitStatusExt::from_raw` takes the code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Shared mock implementations ──────────────────────────────────────────────

/// One recorded collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeCall {
    Teardown { force: bool },
    BringUp { rebuild_images: bool },
}

/// Records every call and reports success.
#[derive(Default)]
pub struct RecordingCompose {
    pub calls: Mutex<Vec<ComposeCall>>,
}

impl RecordingCompose {
    pub fn calls(&self) -> Vec<ComposeCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Compose for RecordingCompose {
    async fn teardown(&self, force: bool) -> Result<Output> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(ComposeCall::Teardown { force });
        Ok(ok_output(b""))
    }

    async fn bring_up(&self, rebuild_images: bool) -> Result<Output> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(ComposeCall::BringUp { rebuild_images });
        Ok(ok_output(b""))
    }
}

/// Teardown succeeds; bring-up exits non-zero with stderr.
pub struct FailingBringUp;

impl Compose for FailingBringUp {
    async fn teardown(&self, _force: bool) -> Result<Output> {
        Ok(ok_output(b""))
    }

    async fn bring_up(&self, _rebuild_images: bool) -> Result<Output> {
        Ok(err_output(1, b"cannot connect to the container daemon"))
    }
}

/// Never expected to be reached.
pub struct UnreachableCompose;

impl Compose for UnreachableCompose {
    async fn teardown(&self, _force: bool) -> Result<Output> {
        anyhow::bail!("not expected in this test")
    }

    async fn bring_up(&self, _rebuild_images: bool) -> Result<Output> {
        anyhow::bail!("not expected in this test")
    }
}
