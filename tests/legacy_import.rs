mod common;
use common::cli::{IdeasWorkspace, run_ideas};
use std::fs;

#[test]
fn test_init_from_legacy_list() {
    let workspace = IdeasWorkspace::new();
    let seed = workspace.root.join("bundle.csv");
    fs::write(&seed, "Learn Rust\nRepaint the door\nCall grandma\n").expect("write seed");

    let init = run_ideas(&workspace, ["init", "--from", "bundle.csv"], "init_from");
    assert!(init.status.success(), "init failed: {}", init.stderr);
    assert!(init.stdout.contains("3 idea(s)"));
    assert_eq!(
        workspace.read_data(),
        "Learn Rust:::0:::0\nRepaint the door:::0:::0\nCall grandma:::0:::0\n"
    );

    let list = run_ideas(&workspace, ["list"], "list");
    assert!(list.status.success());
    assert!(list.stdout.contains("○   1. Learn Rust"));
    assert!(list.stdout.contains("3 idea(s): 3 new, 0 in progress, 0 complete"));

    let current = run_ideas(&workspace, ["current"], "current");
    assert!(current.stdout.contains("Nothing in progress"));
}

#[test]
fn test_legacy_data_file_is_upgraded_on_save() {
    let workspace = IdeasWorkspace::new();
    workspace.write_data("A\nB\nC\n");

    let add = run_ideas(&workspace, ["add", "D"], "add");
    assert!(add.status.success(), "add failed: {}", add.stderr);
    assert_eq!(
        workspace.read_data(),
        "A:::0:::0\nB:::0:::0\nC:::0:::0\nD:::0:::0\n"
    );
}

#[test]
fn test_list_json_and_active_filter() {
    let workspace = IdeasWorkspace::new();
    workspace.write_data("A:::0:::1\nB:::1:::0\nC\n");

    let out = run_ideas(&workspace, ["list", "--json", "--active"], "list_json");
    assert!(out.status.success(), "list failed: {}", out.stderr);
    let entries: serde_json::Value = serde_json::from_str(&out.stdout).expect("json");
    let entries = entries.as_array().expect("array");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["description"], "B");
    assert_eq!(entries[0]["status"], "in_progress");
    assert_eq!(entries[0]["current"], true);
    assert_eq!(entries[1]["number"], 3);
    assert_eq!(entries[1]["status"], "new");
}

#[test]
fn test_list_without_data_prompts_for_first_idea() {
    let workspace = IdeasWorkspace::new();

    let out = run_ideas(&workspace, ["list"], "list_empty");
    assert!(out.status.success());
    assert!(out.stdout.contains("No ideas yet"));
    assert!(!workspace.data_file().exists());
}
