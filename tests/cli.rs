// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests of the merge-checks binary.

use assert_cmd::Command;
use git2::{Oid, Repository, Signature};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const OFFLINE_CONFIG: &str = r#"
[resolver]
fetch = false
"#;

fn commit(repo: &Repository, message: &str, parents: &[Oid]) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<git2::Commit<'_>> = parents
        .iter()
        .map(|id| repo.find_commit(*id).unwrap())
        .collect();
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
    let oid = repo
        .commit(None, &sig, &sig, message, &tree, &parent_refs)
        .unwrap();
    repo.set_head_detached(oid).unwrap();
    oid
}

/// A repository with a root commit, plus an offline config next to it.
fn setup(dir: &Path) -> (Repository, Oid) {
    let repo = Repository::init(dir).unwrap();
    let root = commit(&repo, "chore(repo): initial commit", &[]);
    std::fs::write(dir.join("merge-checks.toml"), OFFLINE_CONFIG).unwrap();
    (repo, root)
}

fn merge_checks(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("merge-checks").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_version() {
    Command::cargo_bin("merge-checks")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("merge-checks "));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    merge_checks(dir.path()).arg("init").assert().success();
    let written = std::fs::read_to_string(dir.path().join("merge-checks.toml")).unwrap();
    assert!(written.contains("[policy]"));

    merge_checks(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    merge_checks(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_check_clean_range_passes() {
    let dir = TempDir::new().unwrap();
    let (repo, root) = setup(dir.path());
    let first = commit(&repo, "feat(cli): add flag", &[root]);
    commit(&repo, "docs(readme): describe flag", &[first]);

    merge_checks(dir.path())
        .args(["check", "--base", &root.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn test_check_fixup_fails() {
    let dir = TempDir::new().unwrap();
    let (repo, root) = setup(dir.path());
    let first = commit(&repo, "feat(cli): add flag", &[root]);
    let tip = commit(&repo, "fixup! feat(cli): add flag", &[first]);

    merge_checks(dir.path())
        .args([
            "check",
            "--base",
            &root.to_string(),
            "--head",
            &tip.to_string(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 fixup and 0 squash commits found"));
}

#[test]
fn test_check_identical_head() {
    let dir = TempDir::new().unwrap();
    setup(dir.path());

    merge_checks(dir.path())
        .args(["check", "--base", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits to check"));
}

#[test]
fn test_check_commit_list_json() {
    let dir = TempDir::new().unwrap();
    let (repo, root) = setup(dir.path());
    let side = commit(&repo, "feat(cli): side work", &[root]);
    let merge = commit(&repo, "chore(repo): merge side", &[root, side]);

    merge_checks(dir.path())
        .args(["--format", "json", "check", "--commits", &merge.to_string()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"failed_check\": \"merge-commits\""))
        .stdout(predicate::str::contains("\"summary\": \"Contains merge commits\""));
}

#[test]
fn test_dry_run_local_strategy_reporting_modes() {
    let dir = TempDir::new().unwrap();
    let (repo, root) = setup(dir.path());
    repo.reference("refs/remotes/origin/main", root, true, "test")
        .unwrap();
    let tip = commit(&repo, "update stuff", &[root]);

    let run_args = [
        "--dry-run",
        "run",
        "--strategy",
        "local",
        "--base-ref",
        "main",
        "--repository",
        "acme/widgets",
        "--sha",
        &tip.to_string(),
        "--token",
        "unused",
        "--run-id",
        "1",
    ];

    merge_checks(dir.path())
        .args(run_args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid commit message format found"))
        .stdout(predicate::str::contains("update stuff"));

    merge_checks(dir.path())
        .args(run_args)
        .args(["--mode", "exit-code"])
        .assert()
        .code(1);
}

#[test]
fn test_run_resolves_abbreviated_sha() {
    let dir = TempDir::new().unwrap();
    let (repo, root) = setup(dir.path());
    repo.reference("refs/remotes/origin/main", root, true, "test")
        .unwrap();
    let short_sha = root.to_string()[..8].to_string();

    merge_checks(dir.path())
        .args([
            "--dry-run",
            "run",
            "--strategy",
            "local",
            "--base-ref",
            "main",
            "--repository",
            "acme/widgets",
            "--sha",
            &short_sha,
            "--token",
            "unused",
            "--run-id",
            "1",
            "--mode",
            "exit-code",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits to check"));
}
