//! Terminal styling utilities for output outside the dashboard

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static BRAIN: Emoji<'_, '_> = Emoji("🧠 ", "");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗██╗  ██╗██╗   ██╗██████╗ ███╗   ██╗
    ██╔════╝██║  ██║██║   ██║██╔══██╗████╗  ██║
    ██║     ███████║██║   ██║██████╔╝██╔██╗ ██║
    ██║     ██╔══██║██║   ██║██╔══██╗██║╚██╗██║
    ╚██████╗██║  ██║╚██████╔╝██║  ██║██║ ╚████║
     ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("◎").magenta().bold(),
        style("Churnscope · who is about to leave, and why").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the artifact configuration card
pub fn print_config(data: &Path, preprocessor: &Path, logistic: &Path, forest: &Path) {
    let box_width = 62;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Artifacts").cyan().bold(),
        " ".repeat(box_width - 15)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Dataset:      {:<40}│",
        FOLDER,
        truncate_path(data, 39)
    );
    println!(
        "    │  {} Preprocessor: {:<40}│",
        GEAR,
        truncate_path(preprocessor, 39)
    );
    println!(
        "    │  {} Logistic:     {:<40}│",
        BRAIN,
        truncate_path(logistic, 39)
    );
    println!(
        "    │  {} Forest:       {:<40}│",
        BRAIN,
        truncate_path(forest, 39)
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Churnscope session closed.").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
