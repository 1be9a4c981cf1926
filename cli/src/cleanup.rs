//! Exactly-once cleanup across normal exit, error return, and signals.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Removes a partially staged directory on every exit path.
///
/// Armed with the staging path at the top of the run; the driver disarms
/// it once the harness is up, so a completed run leaves the staged volume
/// in place for the running environments. The routine fires at most once
/// even when the `Drop` impl and the signal listener race.
#[derive(Clone)]
pub struct CleanupGuard {
    inner: Arc<Inner>,
}

struct Inner {
    staging: PathBuf,
    armed: AtomicBool,
    fired: AtomicBool,
}

impl CleanupGuard {
    #[must_use]
    pub fn arm(staging: PathBuf) -> Self {
        Self {
            inner: Arc::new(Inner {
                staging,
                armed: AtomicBool::new(true),
                fired: AtomicBool::new(false),
            }),
        }
    }

    /// Keep the staged directory: the harness now owns it.
    pub fn disarm(&self) {
        self.inner.armed.store(false, Ordering::SeqCst);
    }

    /// Run the cleanup routine. Idempotent; removal is best-effort and
    /// errors are swallowed.
    pub fn fire(&self) {
        if self.inner.fired.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.inner.armed.load(Ordering::SeqCst) && self.inner.staging.exists() {
            let _ = std::fs::remove_dir_all(&self.inner.staging);
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.inner.armed.load(Ordering::SeqCst)
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        // The signal listener holds the only other clone and never drops
        // it early, so firing here covers normal and error returns.
        self.fire();
    }
}

/// Fire `guard` and exit 130 when an interrupt/termination-class signal
/// arrives. The task runs for the whole process lifetime.
pub fn spawn_signal_listener(guard: CleanupGuard) {
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        guard.fire();
        std::process::exit(130);
    });
}

#[cfg(unix)]
async fn wait_for_shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
            }
        }
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
