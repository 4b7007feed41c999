//! Filesystem-backed project root detection
//!
//! Walks up from a path looking for well-known project markers.

use std::path::{Path, PathBuf};

use super::ProjectDetector;

/// Files or directories whose presence marks a project root
const PROJECT_MARKERS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".project",
    "Cargo.toml",
    "package.json",
    "go.mod",
    "pyproject.toml",
    "Makefile",
];

/// Detects project roots by looking for marker files in ancestor directories
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    markers: Vec<String>,
}

impl Default for MarkerDetector {
    fn default() -> Self {
        Self {
            markers: PROJECT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl MarkerDetector {
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    fn is_project_root(&self, dir: &Path) -> bool {
        self.markers.iter().any(|marker| dir.join(marker).exists())
    }
}

impl ProjectDetector for MarkerDetector {
    /// Nearest ancestor (or `path` itself, if a directory) carrying a marker
    fn detect_project_root(&self, path: &Path) -> Option<PathBuf> {
        let start = if path.is_dir() { Some(path) } else { path.parent() };

        let root = start?
            .ancestors()
            .find(|dir| self.is_project_root(dir))
            .map(Path::to_path_buf);

        match &root {
            Some(root) => tracing::trace!("Project root for {}: {}", path.display(), root.display()),
            None => tracing::trace!("No project root for {}", path.display()),
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detects_nearest_marker() {
        let tmp = tempfile::tempdir().unwrap();
        let proj = tmp.path().join("proj");
        let nested = proj.join("crates").join("inner");
        fs::create_dir_all(nested.join("src")).unwrap();
        fs::write(proj.join("Cargo.toml"), "").unwrap();
        fs::write(nested.join("Cargo.toml"), "").unwrap();
        let file = nested.join("src").join("lib.rs");
        fs::write(&file, "").unwrap();

        let detector = MarkerDetector::default();
        assert_eq!(detector.detect_project_root(&file), Some(nested));
    }

    #[test]
    fn test_directory_can_be_its_own_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();

        let detector = MarkerDetector::default();
        assert_eq!(
            detector.detect_project_root(tmp.path()),
            Some(tmp.path().to_path_buf())
        );
    }

    #[test]
    fn test_no_marker_gives_none() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        let detector = MarkerDetector::with_markers(["does-not-exist.marker"]);
        assert_eq!(detector.detect_project_root(&file), None);
    }
}
