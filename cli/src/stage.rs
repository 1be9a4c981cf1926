//! Playbook staging — fresh copy into the fixed staging path plus
//! inventory injection.
//!
//! Staging is not cumulative: whatever a previous run left at the staging
//! path is removed first. The user's source playbook directory is never
//! touched.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cli::Config;
use crate::error::Error;
use crate::paths::{HarnessPaths, INVENTORY_FILE};

/// Base name given to a playbook's own inventory when it is moved aside.
const INVENTORY_BACKUP: &str = "inventory.orig";

/// Stage `config.playbook_dir` into the fixed staging path and inject the
/// harness inventory. Returns the staged path.
///
/// On success the process working directory has been restored to the
/// harness home.
///
/// # Errors
///
/// `Error::Copy` when the prior staged copy cannot be cleared, the source
/// cannot be copied (the message names the source directory), the staged
/// inventory cannot be moved aside, or the harness inventory cannot be
/// injected. `Error::Directory` when the harness home is gone or
/// inaccessible — fatal, nothing to recover.
pub fn stage(config: &Config, paths: &HarnessPaths) -> Result<PathBuf, Error> {
    let staging = paths.staging();

    if staging.exists() {
        std::fs::remove_dir_all(&staging).map_err(|source| Error::Copy {
            path: staging.clone(),
            source,
        })?;
    }

    copy_dir(&config.playbook_dir, &staging).map_err(|source| Error::Copy {
        path: config.playbook_dir.clone(),
        source,
    })?;

    let staged_inventory = staging.join(INVENTORY_FILE);
    if staged_inventory.exists() {
        let backup = first_available_name(&staging);
        std::fs::rename(&staged_inventory, &backup).map_err(|source| Error::Copy {
            path: staged_inventory.clone(),
            source,
        })?;
    }

    std::fs::copy(paths.inventory_source(), &staged_inventory).map_err(|source| Error::Copy {
        path: staging.clone(),
        source,
    })?;

    std::env::set_current_dir(&paths.home).map_err(|source| Error::Directory {
        path: paths.home.clone(),
        source,
    })?;

    Ok(staging)
}

/// First unused backup name for a staged inventory: `inventory.orig`, then
/// `inventory.orig.0`, `inventory.orig.1`, … Probes sequentially and never
/// returns a path that already exists, so no earlier backup is overwritten.
#[must_use]
pub fn first_available_name(base_dir: &Path) -> PathBuf {
    let plain = base_dir.join(INVENTORY_BACKUP);
    if !plain.exists() {
        return plain;
    }
    let mut n: u32 = 0;
    loop {
        let candidate = base_dir.join(format!("{INVENTORY_BACKUP}.{n}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Recursively copy `src` into `dst`, preserving the directory shape.
/// `dst` must not exist yet; intermediate directories are created.
fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let dest = dst.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest)?;
        } else {
            std::fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
