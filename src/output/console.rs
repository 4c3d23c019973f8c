//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════╗
║     reddit-embed-relay                            ║
║     Subreddit RSS → Discord image embeds          ║
╚═══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(subreddit: &str, top_time: &str, max_per_run: usize) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Subreddit:   r/{}", subreddit);
    println!("  Top window:  {}", top_time);
    println!("  Max per run: {}", max_per_run);
    println!();
}
