use std::path::PathBuf;

use tempfile::TempDir;

use auto_release::config::Config;
use auto_release::event::ReleaseContext;
use auto_release::git::MockRepository;
use auto_release::labels::LabelSet;
use auto_release::release::MockReleaseClient;
use auto_release::workflow::{run_release, WorkflowOptions, WorkflowOutcome};

/// Config whose changelog and notes files live inside a temp directory
fn test_config(dir: &TempDir) -> (Config, PathBuf) {
    let mut config = Config::default();
    let changelog = dir.path().join("CHANGELOG.md");
    config.changelog.path = changelog.to_string_lossy().to_string();
    config.changelog.notes_path = dir
        .path()
        .join("RELEASE_NOTES.md")
        .to_string_lossy()
        .to_string();
    (config, changelog)
}

#[test]
fn test_first_release_on_main_with_enhancement() {
    let dir = TempDir::new().unwrap();
    let (config, changelog) = test_config(&dir);

    let repo = MockRepository::new()
        .with_commit("a".repeat(40), "add dark mode feature")
        .with_commit("b".repeat(40), "fix startup crash");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("enhancement"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    // No tags exist: base version is 0.1.0, enhancement bumps minor
    match outcome {
        WorkflowOutcome::Released { tag, published, .. } => {
            assert_eq!(tag, "v0.2.0");
            assert!(!published);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert!(repo.tag_names().contains(&"v0.2.0".to_string()));
    assert_eq!(
        repo.pushed_tags.lock().unwrap().as_slice(),
        &[("origin".to_string(), "v0.2.0".to_string())]
    );
    assert!(releases.created.lock().unwrap().is_empty());

    let written = std::fs::read_to_string(&changelog).unwrap();
    assert!(written.starts_with("## v0.2.0\n"));
    assert!(written.contains("### ✨ Features"));
    assert!(written.contains("### 🐛 Bug Fixes"));
}

#[test]
fn test_bug_fix_on_develop_bumps_patch() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new()
        .with_tag("dev-1.4.2")
        .with_commit("c".repeat(40), "fix flaky retry logic");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("develop", LabelSet::parse("bug"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    match outcome {
        WorkflowOutcome::Released { tag, .. } => assert_eq!(tag, "dev-1.4.3"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_unsupported_branch_has_no_side_effects() {
    let dir = TempDir::new().unwrap();
    let (config, changelog) = test_config(&dir);

    let repo = MockRepository::new().with_commit("d".repeat(40), "some work");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("feature/x", LabelSet::parse("major,publish"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    assert_eq!(
        outcome,
        WorkflowOutcome::UnsupportedBranch {
            branch: "feature/x".to_string()
        }
    );
    assert!(repo.tag_names().is_empty());
    assert!(repo.pushed_tags.lock().unwrap().is_empty());
    assert!(repo.committed_files.lock().unwrap().is_empty());
    assert!(releases.created.lock().unwrap().is_empty());
    assert!(!changelog.exists());
}

#[test]
fn test_publish_label_creates_prerelease_on_develop() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new()
        .with_tag("dev-0.3.0")
        .with_commit("e".repeat(40), "feat: streaming uploads");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("develop", LabelSet::parse("feature,Publish"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    match outcome {
        WorkflowOutcome::Released { tag, published, .. } => {
            assert_eq!(tag, "dev-0.4.0");
            assert!(published);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let created = releases.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].tag, "dev-0.4.0");
    assert!(created[0].prerelease);

    // The notes file carries the changelog block
    let notes = std::fs::read_to_string(&config.changelog.notes_path).unwrap();
    assert!(notes.starts_with("## dev-0.4.0\n"));
    assert!(notes.contains("streaming uploads"));
}

#[test]
fn test_publish_on_main_is_a_stable_release() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v2.0.0");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("major,publish"));

    run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    let created = releases.created.lock().unwrap();
    assert_eq!(created[0].tag, "v3.0.0");
    assert!(!created[0].prerelease);
}

#[test]
fn test_major_label_dominates() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v1.2.3");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("bug,enhancement,major"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    match outcome {
        WorkflowOutcome::Released { tag, .. } => assert_eq!(tag, "v2.0.0"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_unknown_labels_default_to_patch() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v1.2.3");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("documentation,ci"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    match outcome {
        WorkflowOutcome::Released { tag, .. } => assert_eq!(tag, "v1.2.4"),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_dry_run_makes_no_changes() {
    let dir = TempDir::new().unwrap();
    let (config, changelog) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v1.0.0");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("bug,publish"));

    let options = WorkflowOptions {
        dry_run: true,
        ..WorkflowOptions::default()
    };
    let outcome = run_release(&context, &config, &repo, &releases, &options).unwrap();

    assert_eq!(
        outcome,
        WorkflowOutcome::DryRun {
            tag: "v1.0.1".to_string(),
            would_publish: true
        }
    );
    assert_eq!(repo.tag_names(), vec!["v1.0.0".to_string()]);
    assert!(repo.pushed_tags.lock().unwrap().is_empty());
    assert!(releases.created.lock().unwrap().is_empty());
    assert!(!changelog.exists());
}

#[test]
fn test_nothing_to_commit_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v1.0.0").with_clean_tree();
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("fix"));

    let outcome = run_release(
        &context,
        &config,
        &repo,
        &releases,
        &WorkflowOptions::default(),
    )
    .unwrap();

    // Run still completes and tags even though the commit was a no-op
    match outcome {
        WorkflowOutcome::Released { tag, .. } => assert_eq!(tag, "v1.0.1"),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(repo.pushed_branches.lock().unwrap().is_empty());
    assert_eq!(repo.pushed_tags.lock().unwrap().len(), 1);
}

#[test]
fn test_no_publish_flag_overrides_label() {
    let dir = TempDir::new().unwrap();
    let (config, _) = test_config(&dir);

    let repo = MockRepository::new().with_tag("v1.0.0");
    let releases = MockReleaseClient::new();
    let context = ReleaseContext::new("main", LabelSet::parse("publish"));

    let options = WorkflowOptions {
        no_publish: true,
        ..WorkflowOptions::default()
    };
    let outcome = run_release(&context, &config, &repo, &releases, &options).unwrap();

    match outcome {
        WorkflowOutcome::Released { published, .. } => assert!(!published),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(releases.created.lock().unwrap().is_empty());
}
