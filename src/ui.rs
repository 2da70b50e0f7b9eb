//! Terminal output helpers - the tool's logging surface in CI logs.

use console::style;

use crate::labels::LabelSet;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), message);
}

/// Show the resolved run inputs (branch and labels).
pub fn display_context(branch: &str, labels: &LabelSet) {
    println!("{} Branch: {}", style("🌿").dim(), style(branch).bold());
    if labels.is_empty() {
        println!("{} Labels: (none)", style("🔖").dim());
    } else {
        println!("{} Labels: {}", style("🔖").dim(), labels.names().join(", "));
    }
}

/// Show the tag transition for this run.
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => {
            println!(
                "Tag: {} -> {}",
                style(old).red(),
                style(new_tag).green().bold()
            );
        }
        None => {
            println!("Initial tag: {}", style(new_tag).green().bold());
        }
    }
}
