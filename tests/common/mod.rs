//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use dockside::config::PanelConfig;
use dockside::host::memory::KnownRoots;
use dockside::host::TreeBrowser;
use dockside::model::SessionId;
use dockside::panel::registry::{self, DockedSession};
use dockside::panel::FollowMode;
use dockside::script::ScriptCommand;
use dockside::workbench::Workbench;

pub const PROJECT: &str = "/root/proj";
pub const OTHER_PROJECT: &str = "/root/other";
pub const NESTED_FILE: &str = "/root/proj/src/a/b.txt";

pub fn path(p: &str) -> PathBuf {
    PathBuf::from(p)
}

/// Workbench knowing two projects, with the default configuration
pub fn test_bench() -> Workbench<KnownRoots> {
    bench_with(PanelConfig::default())
}

pub fn bench_with(config: PanelConfig) -> Workbench<KnownRoots> {
    Workbench::new(config, KnownRoots::new([PROJECT, OTHER_PROJECT]), "/home/user")
}

pub fn bench_following(mode: FollowMode) -> Workbench<KnownRoots> {
    bench_with(PanelConfig {
        follow_buffer_file: mode,
        ..PanelConfig::default()
    })
}

/// Workbench with `file` open and the panel toggled on
pub fn bench_showing(mode: FollowMode, file: &str) -> Workbench<KnownRoots> {
    let mut bench = bench_following(mode);
    bench.run(ScriptCommand::Open(path(file)));
    let messages = bench.run(ScriptCommand::Toggle(None));
    assert!(messages.is_empty(), "unexpected messages: {:?}", messages);
    bench
}

pub fn visible_panel(bench: &Workbench<KnownRoots>) -> Option<DockedSession> {
    registry::find_visible_docked_session(&bench.windows, &bench.browser)
}

pub fn docked_count(bench: &Workbench<KnownRoots>) -> usize {
    registry::docked_sessions(&bench.browser).len()
}

pub fn session_root(bench: &Workbench<KnownRoots>, session: SessionId) -> Option<PathBuf> {
    bench.browser.session(session).map(|s| s.root.clone())
}

pub fn session_entry(bench: &Workbench<KnownRoots>, session: SessionId) -> Option<PathBuf> {
    bench
        .browser
        .session(session)
        .and_then(|s| s.current_entry.clone())
}
