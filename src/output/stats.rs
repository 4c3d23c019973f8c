//! Run statistics reporting.

use console::style;

use crate::run::RunStats;

/// Print statistics for a completed run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("Run statistics:").bold());
    println!("  Entries fetched: {}", stats.fetched);
    println!("  Already seen:    {}", stats.already_seen);
    println!("  Blocked titles:  {}", stats.blocked);
    println!("  Images found:    {}", stats.found);
    if stats.batches_failed > 0 {
        println!(
            "  Batches failed:  {}",
            style(stats.batches_failed).red()
        );
    }
    println!("  Images sent:     {}", style(stats.sent).green());
}
