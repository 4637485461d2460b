//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, FailurePolicy};

/// DecentSampler preset sample sorter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dspreset-sorter",
    version,
    about = "Sort the samples of a DecentSampler preset into categorized folders",
    long_about = "Reads a .dspreset file and copies every sample it references into\n\
                  <output>/<pack name>/<category>/<file name>.\n\n\
                  The category is picked from the leading letters of the sample file name,\n\
                  e.g. BD_909_01.wav goes into Kick."
)]
pub struct Args {
    /// Path to the .dspreset descriptor.
    pub descriptor: PathBuf,

    /// Base directory for sorted samples.
    #[arg(short, long = "output", env = "DSPRESET_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Text that follows the pack word in pack folder names.
    #[arg(long)]
    pub pack_suffix: Option<String>,

    /// Keep sorting the remaining samples when one fails.
    #[arg(long)]
    pub keep_going: bool,

    /// Print where samples would go without copying anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the routing plan as JSON (implies --dry-run).
    #[arg(long)]
    pub json: bool,

    /// Skip samples that already exist at their destination.
    #[arg(long)]
    pub no_overwrite: bool,

    /// Hide per-sample copy lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output {
            config.output.output_root = Some(dir.clone());
        }

        if let Some(suffix) = &self.pack_suffix {
            config.output.pack_suffix = suffix.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.keep_going {
            config.options.failure_policy = FailurePolicy::Continue;
        }

        if self.dry_run || self.json {
            config.options.dry_run = true;
        }

        if self.no_overwrite {
            config.options.overwrite = false;
        }

        if self.quiet {
            config.options.show_copies = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_descriptor() {
        let args = Args::try_parse_from(["dspreset-sorter", "/packs/Kit.dspreset"]).unwrap();
        assert_eq!(args.descriptor, PathBuf::from("/packs/Kit.dspreset"));
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(!args.keep_going);
    }

    #[test]
    fn test_missing_descriptor() {
        assert!(Args::try_parse_from(["dspreset-sorter"]).is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::try_parse_from([
            "dspreset-sorter",
            "Kit.dspreset",
            "--output",
            "/out",
            "--pack-suffix",
            "From Venus",
            "--keep-going",
            "--json",
            "--no-overwrite",
            "-q",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.output.output_root, Some(PathBuf::from("/out")));
        assert_eq!(config.output.pack_suffix, "From Venus");
        assert_eq!(config.options.failure_policy, FailurePolicy::Continue);
        assert!(config.options.dry_run);
        assert!(!config.options.overwrite);
        assert!(!config.options.show_copies);
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let args = Args::try_parse_from(["dspreset-sorter", "Kit.dspreset"]).unwrap();
        let mut config = Config::default();
        config.options.failure_policy = FailurePolicy::Continue;
        args.merge_into_config(&mut config);

        assert_eq!(config.options.failure_policy, FailurePolicy::Continue);
        assert!(config.options.overwrite);
    }
}
