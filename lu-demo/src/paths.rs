//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "lumen";
const APPLICATION: &str = "lutable";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Persistent application data.
///
/// - Linux: `$XDG_DATA_HOME/lutable` or `~/.local/share/lutable`
/// - macOS: `~/Library/Application Support/dev.lumen.lutable`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Regenerable data, including logs.
///
/// - Linux: `$XDG_CACHE_HOME/lutable` or `~/.cache/lutable`
/// - macOS: `~/Library/Caches/dev.lumen.lutable`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn settings_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("settings.db"))
}

/// Name of the log file written by the running process.
pub const LATEST_LOG: &str = "latest.log";

/// Archive `dir/latest.log` and keep at most `keep` archives.
///
/// Archives are named `%Y%m%d_%H%M%S.log`, so name order is age order.
/// Creates `dir` if needed and returns the path the new log should be
/// written to.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut archived = dir.join(format!("{stamp}.log"));
        let mut n = 1;
        while archived.exists() {
            archived = dir.join(format!("{stamp}_{n}.log"));
            n += 1;
        }
        fs::rename(&latest, &archived)?;
    }

    let mut archives = archived_logs(dir)?;
    archives.sort();
    let excess = archives.len().saturating_sub(keep);
    for path in archives.drain(..excess) {
        if let Err(e) = fs::remove_file(&path) {
            log::warn!("[paths] could not remove {}: {e}", path.display());
        }
    }

    Ok(latest)
}

fn archived_logs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path.extension().is_some_and(|ext| ext == "log")
            && path.file_name().is_some_and(|name| name != LATEST_LOG);
        if is_archive {
            logs.push(path);
        }
    }
    Ok(logs)
}
