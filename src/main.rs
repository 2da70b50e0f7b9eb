use anyhow::Result;
use clap::Parser;

use auto_release::config;
use auto_release::event::ReleaseContext;
use auto_release::git::Git2Repository;
use auto_release::release::GhCli;
use auto_release::ui;
use auto_release::workflow::{self, WorkflowOptions, WorkflowOutcome};

#[derive(clap::Parser)]
#[command(
    name = "auto-release",
    about = "Tag, changelog, and publish releases from PR labels"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Branch to release (default: BRANCH or GITHUB_REF)")]
    branch: Option<String>,

    #[arg(
        short,
        long,
        help = "Comma-separated PR labels (default: PR_LABELS or GITHUB_EVENT_PATH)"
    )]
    labels: Option<String>,

    #[arg(short, long, default_value = "origin", help = "Git remote to push to")]
    remote: String,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Never create a GitHub release, even with a publish label")]
    no_publish: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("auto-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Resolve branch and labels from flags or the CI environment
    let context = match ReleaseContext::from_env(args.branch.as_deref(), args.labels.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Open the repository in the current working directory
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let options = WorkflowOptions {
        remote: args.remote,
        dry_run: args.dry_run,
        no_publish: args.no_publish,
    };

    match workflow::run_release(&context, &config, &repo, &GhCli, &options) {
        // Unsupported branch is a clean skip, not a failure
        Ok(WorkflowOutcome::UnsupportedBranch { .. }) => {}
        Ok(WorkflowOutcome::DryRun { .. }) => {}
        Ok(WorkflowOutcome::Released { .. }) => {}
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
