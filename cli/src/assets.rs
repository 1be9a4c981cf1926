//! Embedded harness assets — the static files compiled into the CLI binary.
//!
//! At compile time, `include_dir!` embeds everything under `assets/`:
//!   - `inventory`            — known-good connection definitions for the
//!                              control node to reach the target node
//!   - `docker-compose.yml`   — the fixed two-service harness topology
//!   - `control/Dockerfile`   — image for the node that runs the playbook
//!   - `target/Dockerfile`    — image for the node the playbook configures

use std::path::Path;

use anyhow::{Context, Result};
use include_dir::{Dir, include_dir};

use crate::paths::HarnessPaths;

static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Write any harness file missing from the home directory out of the
/// embedded copies. Files already on disk are left alone — a user may have
/// customized the topology.
///
/// # Errors
///
/// Returns an error if the harness directory cannot be created or a file
/// fails to write.
pub fn seed_harness_dir(paths: &HarnessPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.home)
        .with_context(|| format!("creating harness directory {}", paths.home.display()))?;
    seed_dir(&EMBEDDED_ASSETS, &paths.home)
}

fn seed_dir(dir: &Dir<'_>, dest_root: &Path) -> Result<()> {
    for sub in dir.dirs() {
        let dest = dest_root.join(sub.path());
        std::fs::create_dir_all(&dest)
            .with_context(|| format!("creating harness directory {}", dest.display()))?;
        seed_dir(sub, dest_root)?;
    }
    for file in dir.files() {
        let dest = dest_root.join(file.path());
        if !dest.exists() {
            std::fs::write(&dest, file.contents())
                .with_context(|| format!("writing harness file {}", dest.display()))?;
        }
    }
    Ok(())
}
