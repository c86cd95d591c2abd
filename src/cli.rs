use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};

/// Command line surface. The targets themselves are compiled in; flags
/// only change how the run is reported or whether files are written.
#[derive(Parser, Debug)]
#[command(name = "fencestrip")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Strip stray markdown code fences from the UI component files")]
#[command(
    long_about = "fencestrip removes a leading ```lang line and a trailing ``` line from each \
                  component file in its built-in list, overwriting the files in place. \
                  Run it without arguments to clean every file."
)]
#[command(after_help = "EXAMPLES:\n  \
    fencestrip\n  \
    fencestrip --dry-run -vv\n  \
    fencestrip --output-format json\n  \
    fencestrip --print-config")]
pub struct Cli {
    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only per-file confirmations and errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read and strip every file but write nothing back
    #[arg(long)]
    pub dry_run: bool,

    /// Print the built-in target list as TOML and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        self.output_format.into()
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
