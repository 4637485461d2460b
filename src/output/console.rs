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
╔═══════════════════════════════════════════════════════╗
║     DSPreset Sorter                                   ║
║     Sort preset samples into categorized folders      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    descriptor: &str,
    output_dir: &str,
    pack_suffix: &str,
    failure_policy: &str,
    dry_run: bool,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Descriptor: {}", descriptor);
    println!("  Output: {}", output_dir);
    println!("  Pack pattern: <word> {}", pack_suffix);
    println!("  On failure: {}", failure_policy);
    if dry_run {
        println!("  Mode: {}", style("dry run").yellow());
    }
    println!();
}
