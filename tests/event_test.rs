use std::env;

use serial_test::serial;
use tempfile::TempDir;

use auto_release::event::ReleaseContext;

fn clear_ci_env() {
    env::remove_var("BRANCH");
    env::remove_var("GITHUB_REF");
    env::remove_var("PR_LABELS");
    env::remove_var("GITHUB_EVENT_PATH");
}

#[test]
#[serial]
fn test_branch_env_takes_priority_over_github_ref() {
    clear_ci_env();
    env::set_var("BRANCH", "develop");
    env::set_var("GITHUB_REF", "refs/heads/main");

    let ctx = ReleaseContext::from_env(None, Some("")).unwrap();
    assert_eq!(ctx.branch, "develop");

    clear_ci_env();
}

#[test]
#[serial]
fn test_github_ref_prefix_is_stripped() {
    clear_ci_env();
    env::set_var("GITHUB_REF", "refs/heads/main");

    let ctx = ReleaseContext::from_env(None, Some("")).unwrap();
    assert_eq!(ctx.branch, "main");

    clear_ci_env();
}

#[test]
#[serial]
fn test_missing_branch_is_an_error() {
    clear_ci_env();
    assert!(ReleaseContext::from_env(None, Some("bug")).is_err());
}

#[test]
#[serial]
fn test_pr_labels_env() {
    clear_ci_env();
    env::set_var("PR_LABELS", "Bug, Publish");

    let ctx = ReleaseContext::from_env(Some("main"), None).unwrap();
    assert!(ctx.labels.contains("bug"));
    assert!(ctx.labels.contains("publish"));

    clear_ci_env();
}

#[test]
#[serial]
fn test_labels_from_event_payload() {
    clear_ci_env();

    let dir = TempDir::new().unwrap();
    let event_path = dir.path().join("event.json");
    std::fs::write(
        &event_path,
        r#"{"pull_request": {"labels": [{"name": "enhancement"}, {"name": "publish"}]}}"#,
    )
    .unwrap();
    env::set_var("GITHUB_EVENT_PATH", &event_path);

    let ctx = ReleaseContext::from_env(Some("main"), None).unwrap();
    assert!(ctx.labels.contains("enhancement"));
    assert!(ctx.labels.contains("publish"));

    clear_ci_env();
}

#[test]
#[serial]
fn test_no_label_sources_yields_empty_set() {
    clear_ci_env();

    let ctx = ReleaseContext::from_env(Some("main"), None).unwrap();
    assert!(ctx.labels.is_empty());
}
