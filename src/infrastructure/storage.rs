// ============================================================
// OUTPUT STORAGE
// ============================================================
// Where rendered chart images land on disk

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::error::Result;

/// Unique output path for one render, so concurrent sessions never
/// clobber a shared plot file
pub fn session_plot_path(dir: &Path) -> PathBuf {
    dir.join(format!("plot-{}.png", Uuid::new_v4()))
}

/// Ensure the parent directory of an output path exists
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_paths_are_unique() {
        let dir = Path::new("/tmp");
        let a = session_plot_path(dir);
        let b = session_plot_path(dir);
        assert_ne!(a, b);
        assert!(a.to_string_lossy().ends_with(".png"));
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b/plot.png");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().exists());
    }
}
