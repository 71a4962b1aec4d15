//! Data-directory discovery and context construction.
//!
//! The store directory is resolved in priority order: an explicit path from
//! the caller, the `TROVE_HOME` environment variable, the nearest ancestor
//! `.trove/` directory (stopping at the home directory or filesystem root),
//! and finally the platform data directory.

use crate::api::TroveApi;
use crate::config::TroveConfig;
use crate::repo::Repository;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "TROVE_HOME";

pub struct TroveContext {
    pub api: TroveApi<FileStore>,
    pub config: TroveConfig,
}

/// Find a project-local store by walking up from cwd looking for a
/// directory containing `.trove`. Stops at the home directory or the
/// filesystem root. Returns the `.trove` directory itself.
pub fn find_project_store(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        let trove_dir = current.join(".trove");
        if trove_dir.is_dir() {
            return Some(trove_dir);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return None;
            }
        }
    }
}

/// Resolve the data directory for this invocation.
pub fn resolve_data_dir(cwd: &Path, override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    if let Some(project) = find_project_store(cwd) {
        return project;
    }

    let proj_dirs =
        ProjectDirs::from("com", "trove", "trove").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

/// Build the application context: resolve the data dir, load its config,
/// and open the repository over a file store.
pub fn initialize(cwd: &Path, override_dir: Option<&Path>) -> TroveContext {
    let data_dir = resolve_data_dir(cwd, override_dir);

    let config = TroveConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone()).with_file_name(&config.store_file);
    let repo = Repository::open(store).with_pretty(config.pretty);
    let api = TroveApi::new(repo, data_dir);

    TroveContext { api, config }
}
