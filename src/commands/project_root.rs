//! Project root discovery for config lookup

use std::path::{Path, PathBuf};

use dockerbuild::config::PROJECT_CONFIG_FILE;

/// Find the directory whose `dockerbuild.toml` applies to an invocation.
///
/// Walks upward from `start`; the first directory holding either
/// `dockerbuild.toml` or `.git` wins. Falls back to `start`.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join(".git").exists())
        .unwrap_or(start)
        .to_path_buf()
}
