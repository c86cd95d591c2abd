pub mod cli;
pub mod config;
pub mod error;
pub mod stripper;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::CleanupConfig;
pub use error::{FenceStripError, Result, UserFriendlyError};

// Core functionality re-exports
pub use stripper::{
    strip_fences, strip_fences_with_outcome, Cleaner, CleanupReport, DiskStore, FencePatterns,
    FileOutcome, FileStore, MemoryStore, StripOutcome,
};
pub use ui::{format_confirmation, OutputFormatter, OutputMode};

/// Main library interface: one cleanup run over a configured target set.
pub struct FenceStrip {
    config: CleanupConfig,
    output_formatter: OutputFormatter,
    dry_run: bool,
}

impl FenceStrip {
    /// Create a new instance; the configuration is validated up front.
    pub fn new(config: CleanupConfig, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            dry_run: false,
        })
    }

    /// Create an instance for the built-in targets from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        Ok(Self::new(
            CleanupConfig::default(),
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        )?
        .with_dry_run(cli_args.dry_run))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Clean every target on disk, stopping at the first failure.
    pub fn run(&self) -> Result<CleanupReport> {
        self.run_with_store(&DiskStore)
    }

    /// Clean every target through `store`, printing a confirmation per file.
    pub fn run_with_store(&self, store: &dyn FileStore) -> Result<CleanupReport> {
        let formatter = &self.output_formatter;

        if self.dry_run {
            formatter.warning("Dry run: files will be read but not written");
        }

        formatter.start_operation(&format!(
            "Cleaning {} files in {}",
            self.config.files.len(),
            self.config.base_directory.display()
        ));

        let on_file = |outcome: &FileOutcome| formatter.print_file_outcome(outcome);

        let report = Cleaner::new(&self.config, store)
            .with_dry_run(self.dry_run)
            .run(Some(&on_file))?;

        formatter.print_cleanup_report(&report);
        if self.dry_run {
            formatter.info("Run without --dry-run to write the changes");
        }

        Ok(report)
    }

    /// Render the built-in target list.
    pub fn describe_config(&self) -> Result<String> {
        self.config.to_toml()
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &FenceStripError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet(config: CleanupConfig) -> FenceStrip {
        FenceStrip::new(config, OutputMode::Plain, 0, true).unwrap()
    }

    #[test]
    fn test_creation_uses_default_targets() {
        let fencestrip = FenceStrip::new(CleanupConfig::default(), OutputMode::Human, 1, false);
        assert!(fencestrip.is_ok());

        let fencestrip = fencestrip.unwrap();
        assert_eq!(fencestrip.config().files.len(), 15);
        assert!(!fencestrip.is_dry_run());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = FenceStrip::new(
            CleanupConfig::new("/ui", Vec::<String>::new()),
            OutputMode::Plain,
            0,
            true,
        );
        assert!(matches!(result, Err(FenceStripError::Config { .. })));
    }

    #[test]
    fn test_run_with_memory_store() {
        let store = MemoryStore::new()
            .with_file("/ui/table.jsx", "```jsx\nexport { Table }\n```\n")
            .with_file("/ui/sheet.jsx", "export { Sheet }");
        let fencestrip = quiet(CleanupConfig::new("/ui", ["table.jsx", "sheet.jsx"]));

        let report = fencestrip.run_with_store(&store).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(store.text("/ui/table.jsx").as_deref(), Some("export { Table }"));
        assert_eq!(store.text("/ui/sheet.jsx").as_deref(), Some("export { Sheet }"));
    }

    #[test]
    fn test_dry_run_with_memory_store() {
        let store = MemoryStore::new().with_file("/ui/table.jsx", "```jsx\nx\n```");
        let fencestrip = quiet(CleanupConfig::new("/ui", ["table.jsx"])).with_dry_run(true);

        let report = fencestrip.run_with_store(&store).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.files_changed(), 1);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_run_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("slider.jsx"), "```jsx\nexport { Slider }\n```").unwrap();

        let fencestrip = quiet(CleanupConfig::new(root, ["slider.jsx"]));
        fencestrip.run().unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("slider.jsx")).unwrap(),
            "export { Slider }"
        );
    }

    #[test]
    fn test_run_on_disk_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("textarea.jsx"), "```jsx\nt\n```").unwrap();

        let fencestrip = quiet(CleanupConfig::new(root, ["missing.jsx", "textarea.jsx"]));
        let err = fencestrip.run().unwrap_err();

        assert_eq!(err.exit_code(), 3);
        match err {
            FenceStripError::Io { path, .. } => assert_eq!(path, root.join("missing.jsx")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            std::fs::read_to_string(root.join("textarea.jsx")).unwrap(),
            "```jsx\nt\n```"
        );
    }

    #[test]
    fn test_describe_config() {
        let fencestrip = quiet(CleanupConfig::default());
        let rendered = fencestrip.describe_config().unwrap();
        assert!(rendered.contains("dropdown-menu.jsx"));
        assert!(rendered.contains("Catalogue-Glow"));
    }

    #[test]
    fn test_version_info() {
        assert_eq!(version_info(), "1.0.0");
    }
}
