//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "lintel";
const APPLICATION: &str = "lintel-demo";

/// Used when no home directory can be determined.
const FALLBACK_LOG: &str = "lintel-demo.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/lintel-demo` or `~/.cache/lintel-demo`
/// - macOS: `~/Library/Caches/dev.lintel.lintel-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\lintel\lintel-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the log file, in the cache directory when there is one.
pub fn log_file() -> PathBuf {
    cache_dir()
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG))
}
