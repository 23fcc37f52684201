use anyhow::Result;
use log::{debug, trace};
use path_clean::clean;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Resolves an import target against the directory of the importing file.
///
/// The join is purely lexical: `.` and `..` segments are collapsed, the
/// filesystem is never consulted, and the target does not have to exist. Two
/// spellings of the same file produce the same path, which is what makes the
/// result usable as a visited-set key.
pub fn normalize(base_dir: &Path, target: &str) -> PathBuf {
    let resolved = clean(base_dir.join(target));
    trace!("Normalized '{}' from {} to {}", target, base_dir.display(), resolved.display());
    resolved
}

/// Turns a user-supplied path into the absolute form the resolver works with.
///
/// Relative paths are taken from the current directory. Symlinks are not
/// followed, so a missing file still comes back as a path and can be reported
/// as unreadable later.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir()?;
        trace!("Joining {} onto current directory {}", path.display(), cwd.display());
        cwd.join(path)
    };
    let absolute = clean(joined);
    debug!("Absolutized {} to {}", path.display(), absolute.display());
    Ok(absolute)
}
