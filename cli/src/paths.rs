//! System-constant locations of the harness working area.

use std::path::PathBuf;

use anyhow::Result;

/// Environment override for the harness home, used by tests and CI.
pub const HOME_ENV: &str = "PLAYPEN_HOME";

/// Canonical name of the connection-definition file.
pub const INVENTORY_FILE: &str = "inventory";

/// Compose topology file inside the harness home.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

const HOME_DIR_NAME: &str = ".playpen";
const BUILD_DIR: &str = "build";
const STAGING_DIR: &str = "playbook";

/// Resolved filesystem layout of one run. Constructed once, immutable.
#[derive(Debug, Clone)]
pub struct HarnessPaths {
    /// Harness home. The working directory is restored here after staging
    /// so the compose file and its relative volume paths line up.
    pub home: PathBuf,
}

impl HarnessPaths {
    /// Resolve the harness home: `$PLAYPEN_HOME` if set, `~/.playpen`
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is
    /// available.
    pub fn resolve() -> Result<Self> {
        let home = match std::env::var_os(HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?
                .join(HOME_DIR_NAME),
        };
        Ok(Self { home })
    }

    /// Rooted at an explicit home, for tests.
    #[must_use]
    pub fn rooted_at(home: PathBuf) -> Self {
        Self { home }
    }

    /// Fixed staging path, fully replaced per run.
    #[must_use]
    pub fn staging(&self) -> PathBuf {
        self.home.join(BUILD_DIR).join(STAGING_DIR)
    }

    /// The harness's own inventory file, injected into every staged copy.
    #[must_use]
    pub fn inventory_source(&self) -> PathBuf {
        self.home.join(INVENTORY_FILE)
    }

    /// Compose topology consumed by the orchestration tool.
    #[must_use]
    pub fn compose_file(&self) -> PathBuf {
        self.home.join(COMPOSE_FILE)
    }
}
