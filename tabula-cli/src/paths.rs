//! Where the CLI looks for its default config and writes its log.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "tabula", "tabula")
}

/// `<config dir>/table.json`, e.g. `~/.config/tabula/table.json` on Linux.
pub fn default_config() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("table.json"))
}

/// `<cache dir>/tabula.log`, e.g. `~/.cache/tabula/tabula.log` on Linux.
/// Each run truncates it.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("tabula.log"))
}
