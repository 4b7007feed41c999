//! End-to-end script tests
//!
//! Parse a script and play it against the workbench, checking the lines a
//! user would see.

mod common;

use common::*;
use dockside::panel::PanelStatus;
use dockside::script::parse_script;
use dockside::workbench::describe_status;

fn play(script: &str) -> Vec<String> {
    let mut bench = test_bench();
    parse_script(script)
        .unwrap()
        .into_iter()
        .flat_map(|command| bench.run(command))
        .collect()
}

#[test]
fn test_show_and_hide_script() {
    let output = play(
        "open /root/proj/src/a/b.txt\n\
         toggle\n\
         status\n\
         toggle\n\
         status\n",
    );

    assert_eq!(
        output,
        vec![
            "panel: visible (window#2, session#1) root=/root/proj entry=/root/proj/src/a/b.txt"
                .to_string(),
            "panel: hidden".to_string(),
        ]
    );
}

#[test]
fn test_project_switch_script() {
    let output = play(
        "# panel follows the project\n\
         open /root/proj/src/a/b.txt\n\
         toggle\n\
         switch-project /root/other\n\
         status\n\
         follow-project off\n\
         switch-project /root/proj\n\
         status\n",
    );

    assert_eq!(
        output,
        vec![
            "panel: visible (window#2, session#1) root=/root/other entry=-".to_string(),
            "Follow project switch disabled".to_string(),
            "panel: visible (window#2, session#1) root=/root/other entry=-".to_string(),
        ]
    );
}

#[test]
fn test_fullframe_script() {
    let output = play(
        "open /root/proj/src/a/b.txt\n\
         promote\n\
         toggle\n\
         unpromote\n\
         toggle\n\
         status\n",
    );

    assert_eq!(output.len(), 4);
    assert!(output[0].starts_with("Full-frame session on /root/proj/src/a"));
    assert!(output[1].starts_with("Cannot toggle the side panel here"));
    assert_eq!(output[2], "Left full-frame session");
    assert!(output[3].starts_with("panel: visible"));
}

#[test]
fn test_commands_without_panel_report() {
    let output = play(
        "focus panel\n\
         drift 10\n\
         unpromote\n",
    );

    assert_eq!(
        output,
        vec![
            "No Panel window to focus".to_string(),
            "Side panel is not visible".to_string(),
            "No full-frame session here".to_string(),
        ]
    );
}

#[test]
fn test_describe_detached_status() {
    let status = PanelStatus::Detached {
        session: 3,
        root: path(PROJECT),
    };
    assert_eq!(
        describe_status(&status),
        "panel: detached (session#3) root=/root/proj"
    );
}
