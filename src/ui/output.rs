use crate::error::{FenceStripError, UserFriendlyError};
use crate::stripper::{CleanupReport, FileOutcome};
use console::{style, Emoji, Term};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "x ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static BROOM: Emoji = Emoji("🧹 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

/// Per-file confirmation line. The exact text is relied on by whoever
/// watches the run, so it is the same in every non-JSON mode.
pub fn format_confirmation(filename: &str) -> String {
    format!("✓ Nettoyé: {}", filename)
}

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", BROOM, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    /// Reports one processed file. Printed even in quiet mode.
    pub fn print_file_outcome(&self, outcome: &FileOutcome) {
        match self.mode {
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "file",
                    "filename": outcome.filename,
                    "path": outcome.path.display().to_string(),
                    "opening_removed": outcome.opening_removed,
                    "closing_removed": outcome.closing_removed,
                    "written": outcome.written,
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }));
            }
            OutputMode::Human | OutputMode::Plain => {
                if outcome.written {
                    println!("{}", format_confirmation(&outcome.filename));
                } else {
                    println!("- Simulation: {}", outcome.filename);
                }
            }
        }

        self.debug(&format!(
            "{}: {} ({} -> {} bytes)",
            outcome.path.display(),
            outcome.markers_summary(),
            outcome.bytes_before,
            outcome.bytes_after
        ));
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &FenceStripError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Summary and reporting
    pub fn print_cleanup_report(&self, report: &CleanupReport) {
        match self.mode {
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Human => {
                if self.should_show_message(1) {
                    self.print_human_summary(report);
                }
            }
            OutputMode::Plain => {
                if self.should_show_message(1) {
                    self.print_plain_summary(report);
                }
            }
        }
    }

    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {}
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", CROSS, style(message).red().bold()),
                MessageType::Warning => println!("{}{}", WARNING, style(message).yellow().bold()),
                MessageType::Info => println!("{}{}", INFO, style(message).cyan()),
            }
        } else {
            match msg_type {
                MessageType::Error => eprintln!("x {}", message),
                MessageType::Warning => println!("! {}", message),
                MessageType::Info => println!("i {}", message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_summary(&self, report: &CleanupReport) {
        self.print_separator();

        let headline = if report.dry_run {
            "Dry run completed, no file was written"
        } else {
            "Cleanup completed"
        };

        if self.use_colors {
            println!("{}{}", SPARKLES, style(headline).green().bold());
        } else {
            println!("{}", headline);
        }

        let files = report.files.len().to_string();
        let changed = report.files_changed().to_string();
        let removed = format!("{} B", report.bytes_removed());
        let elapsed = format_duration(report.duration());

        for (label, value) in [
            ("Files processed:", files),
            ("Files with fences:", changed),
            ("Bytes removed:", removed),
            ("Time taken:", elapsed),
        ] {
            if self.use_colors {
                println!("  {:<19}{}", label, style(value).cyan().bold());
            } else {
                println!("  {:<19}{}", label, value);
            }
        }

        self.print_separator();
    }

    fn print_plain_summary(&self, report: &CleanupReport) {
        println!("COMPLETED: {}", if report.dry_run { "Dry run" } else { "Cleanup" });
        println!("Files processed: {}", report.files.len());
        println!("Files with fences: {}", report.files_changed());
        println!("Bytes removed: {}", report.bytes_removed());
        println!("Duration: {:?}", report.duration());
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
