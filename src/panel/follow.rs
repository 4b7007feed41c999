//! Follow-the-editor synchronization
//!
//! Decides which directory the panel shows and which entry it highlights for
//! a given file, then applies that through the tree-browser.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::host::PanelHost;
use crate::model::SessionId;

/// How the panel follows the file being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowMode {
    /// No synchronization
    Off,
    /// Navigate to the file's root and select its entry
    Select,
    /// Like `Select`, but expand every directory between the root and the file
    #[default]
    Expand,
}

impl std::str::FromStr for FollowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(FollowMode::Off),
            "select" => Ok(FollowMode::Select),
            "expand" => Ok(FollowMode::Expand),
            _ => Err(format!(
                "unknown follow mode '{}' (expected off, select or expand)",
                s
            )),
        }
    }
}

/// Where the panel should end up for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTarget {
    /// Directory the session is rooted at
    pub root: PathBuf,
    /// Entry to select
    pub entry: PathBuf,
    /// Directories to expand, outermost first (empty in `Select` mode)
    pub expand: Vec<PathBuf>,
}

/// Result of a sync request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing to do: no file, no session, or following is off
    Skipped,
    /// Navigated to a root without selecting an entry
    Navigated { root: PathBuf },
    /// Navigated and selected `target.entry`
    Synced(FollowTarget),
}

/// Resolve `.` and `..` components without touching the filesystem
///
/// `..` never climbs above the root of an absolute path.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    normalized.push(component);
                }
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Directories strictly between `root` and `file`, outermost first
///
/// Empty when `file` is not below `root`.
pub fn ancestors_between(root: &Path, file: &Path) -> Vec<PathBuf> {
    let root = normalize_path(root);
    let file = normalize_path(file);
    let Ok(relative) = file.strip_prefix(&root) else {
        return Vec::new();
    };

    let mut dirs = Vec::new();
    let mut current = root.clone();
    let mut components = relative.components().peekable();
    while let Some(component) = components.next() {
        if components.peek().is_none() {
            break;
        }
        current.push(component);
        dirs.push(current.clone());
    }
    dirs
}

/// Applies the configured follow mode to panel sessions
#[derive(Debug, Clone, Copy)]
pub struct FollowEngine {
    mode: FollowMode,
}

impl FollowEngine {
    pub fn new(mode: FollowMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    /// Compute where the panel should go for `file`
    ///
    /// The project root is used when it contains the file, otherwise the
    /// file's own directory. Returns `None` when following is off or the file
    /// has no parent.
    pub fn target(&self, file: &Path, project_root: Option<&Path>) -> Option<FollowTarget> {
        if self.mode == FollowMode::Off {
            return None;
        }

        let file = normalize_path(file);
        let project_root = project_root.map(normalize_path);
        let root = project_root
            .filter(|root| file.starts_with(root) && file != *root)
            .or_else(|| file.parent().map(Path::to_path_buf))?;

        let expand = match self.mode {
            FollowMode::Expand => ancestors_between(&root, &file),
            _ => Vec::new(),
        };

        Some(FollowTarget {
            root,
            entry: file,
            expand,
        })
    }

    /// Bring `session` in line with `file`
    ///
    /// No-op if `file` is absent, the session no longer exists, or following
    /// is off. A hint that does not contain the file is ignored and the root
    /// is detected instead.
    pub fn sync_to_file(
        &self,
        host: &mut PanelHost<'_>,
        session: SessionId,
        file: Option<&Path>,
        project_root_hint: Option<&Path>,
    ) -> SyncOutcome {
        let Some(file) = file else {
            tracing::trace!("Follow skipped: no active file");
            return SyncOutcome::Skipped;
        };
        if host.browser.session(session).is_none() {
            tracing::trace!("Follow skipped: {} is gone", session);
            return SyncOutcome::Skipped;
        }

        let file = normalize_path(file);
        let project_root = project_root_hint
            .map(normalize_path)
            .filter(|hint| file.starts_with(hint))
            .or_else(|| host.projects.detect_project_root(&file));

        let Some(target) = self.target(&file, project_root.as_deref()) else {
            return SyncOutcome::Skipped;
        };

        self.apply(host, session, &target);
        SyncOutcome::Synced(target)
    }

    /// Re-root `session` at a newly switched-to project
    ///
    /// The active file is selected (and revealed in `Expand` mode) when it
    /// lives inside the new root.
    pub fn sync_to_project(
        &self,
        host: &mut PanelHost<'_>,
        session: SessionId,
        new_root: &Path,
        active_file: Option<&Path>,
    ) -> SyncOutcome {
        if host.browser.session(session).is_none() {
            return SyncOutcome::Skipped;
        }

        let new_root = normalize_path(new_root);
        let target = active_file
            .map(normalize_path)
            .filter(|file| file.starts_with(&new_root))
            .and_then(|file| self.target(&file, Some(new_root.as_path())))
            .filter(|target| target.root == new_root);

        match target {
            Some(target) => {
                self.apply(host, session, &target);
                SyncOutcome::Synced(target)
            }
            None => {
                host.browser.navigate_to(session, &new_root);
                tracing::debug!("{} re-rooted at {}", session, new_root.display());
                SyncOutcome::Navigated { root: new_root }
            }
        }
    }

    fn apply(&self, host: &mut PanelHost<'_>, session: SessionId, target: &FollowTarget) {
        host.browser.navigate_to(session, &target.root);
        for dir in &target.expand {
            host.browser.expand_entry(session, dir);
        }
        host.browser.select_entry(session, &target.entry);

        tracing::debug!(
            "{} following {} (root {}, {} expanded)",
            session,
            target.entry.display(),
            target.root.display(),
            target.expand.len()
        );
    }
}
