//! End to end runs over the fixture prompt tree.

use crate::common::fixtures_root;
use prompt_babel::sync::{discover_sources, SyncPlan};
use prompt_babel::{parse_selection, Target};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_fixture_tree_is_discovered_in_order() {
    let files = discover_sources(&fixtures_root()).expect("fixtures to exist");
    let relatives: Vec<_> = files.iter().map(|f| f.relative.clone()).collect();
    assert_eq!(
        relatives,
        vec![
            Path::new("git").join("commit.md"),
            Path::new("plain.md").to_path_buf(),
            Path::new("summarize.md").to_path_buf(),
        ]
    );
}

#[test]
fn test_sync_selected_targets_mirrors_layout() {
    let out = tempdir().unwrap();
    let targets = parse_selection("3,2").unwrap();

    let report = SyncPlan::new(fixtures_root())
        .with_targets_under(out.path(), &targets)
        .run()
        .expect("sync to run");

    assert!(report.is_clean());
    assert_eq!(report.processed_for(Target::Gemini), 3);
    assert_eq!(report.processed_for(Target::GithubCopilot), 3);
    assert_eq!(report.processed_for(Target::ClaudeCode), 0);

    // Targets are processed in canonical order regardless of selection order.
    assert_eq!(report.written[0].target, Target::Gemini);
    assert_eq!(report.written[0].identifier, "git/commit");

    let copilot = out.path().join("github-copilot").join("prompts");
    assert_eq!(
        fs::read_to_string(copilot.join("summarize.prompt.md")).unwrap(),
        "---\nmode: agent\ndescription: Summarize the file\n---\n\nPlease summarize."
    );
    assert!(copilot.join("git").join("commit.prompt.md").is_file());
    assert!(out
        .path()
        .join("gemini")
        .join("commands")
        .join("plain.toml")
        .is_file());
    assert!(!out.path().join("claude-code").exists());
}

#[test]
fn test_sync_is_repeatable() {
    let out = tempdir().unwrap();
    let plan = SyncPlan::new(fixtures_root()).with_target(Target::ClaudeCode, out.path());

    plan.run().unwrap();
    let first = fs::read_to_string(out.path().join("summarize.md")).unwrap();
    plan.run().unwrap();
    let second = fs::read_to_string(out.path().join("summarize.md")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first,
        "---\ndescription: Summarize the file\n---\n\nPlease summarize."
    );
}
