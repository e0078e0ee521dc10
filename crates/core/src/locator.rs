//! Resolves the reference stylesheet path.
//!
//! The stylesheet location is configuration resolved once at startup, not
//! recomputed per transform. Fallback order:
//!
//! 1. an explicit path (CLI flag or `PEPVIEW_STYLESHEET` environment
//!    variable, both handled by the caller), taken as-is;
//! 2. a `Stylesheets` directory three levels above the running executable
//!    (the layout of a development build tree);
//! 3. a `Stylesheets` directory under the current working directory.
//!
//! Candidates 2 and 3 are accepted when their directory exists. When
//! neither does, the working-directory candidate is returned anyway; the
//! converter then fails with a not-found error naming the file.

use log::debug;
use std::path::{Path, PathBuf};

/// File name of the reference stylesheet.
pub const DEFAULT_STYLESHEET: &str = "render-billing-3.xsl";

/// Directory name probed for the stylesheet.
pub const STYLESHEET_DIR: &str = "Stylesheets";

/// Resolves the stylesheet path per the fallback order above.
pub fn locate_stylesheet(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(dir) = exe_relative_dir()
        && dir.is_dir()
    {
        debug!("using stylesheet directory {}", dir.display());
        return dir.join(DEFAULT_STYLESHEET);
    }

    let dir = std::env::current_dir()
        .map(|cwd| cwd.join(STYLESHEET_DIR))
        .unwrap_or_else(|_| PathBuf::from(STYLESHEET_DIR));
    debug!("using stylesheet directory {}", dir.display());
    dir.join(DEFAULT_STYLESHEET)
}

fn exe_relative_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?;
    Some(dir.join("..").join("..").join("..").join(STYLESHEET_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_unchecked() {
        // An explicit path is taken as-is, even when it does not exist yet.
        let explicit = Path::new("/tmp/custom/my.xsl");
        assert_eq!(locate_stylesheet(Some(explicit)), explicit);
    }

    #[test]
    fn fallback_targets_the_reference_stylesheet() {
        let path = locate_stylesheet(None);
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(DEFAULT_STYLESHEET)
        );
        assert_eq!(
            path.parent().and_then(|p| p.file_name()).and_then(|n| n.to_str()),
            Some(STYLESHEET_DIR)
        );
    }
}
