use crate::error::{FenceStripError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Directory holding the generated UI components.
pub const DEFAULT_BASE_DIRECTORY: &str =
    r"c:\Users\Nourath\Desktop\Projects\Catalogue-Glow\resources\js\components\ui";

/// Components that were written out wrapped in a code fence.
pub const DEFAULT_FILES: &[&str] = &[
    "accordion.jsx",
    "alert-dialog.jsx",
    "badge.jsx",
    "button.jsx",
    "card.jsx",
    "checkbox.jsx",
    "dialog.jsx",
    "dropdown-menu.jsx",
    "input.jsx",
    "label.jsx",
    "select.jsx",
    "sheet.jsx",
    "slider.jsx",
    "table.jsx",
    "textarea.jsx",
];

/// The set of files a cleanup run touches.
///
/// The binary only ever uses [`CleanupConfig::default`]; other instances
/// exist so the cleanup loop can be driven against temporary directories
/// and in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CleanupConfig {
    pub base_directory: PathBuf,
    pub files: Vec<String>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from(DEFAULT_BASE_DIRECTORY),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl CleanupConfig {
    pub fn new<P, I, S>(base_directory: P, files: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_directory: base_directory.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base_directory.join(filename)
    }

    /// Filenames paired with their resolved paths, in list order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.files
            .iter()
            .map(move |name| (name.as_str(), self.resolve(name)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(FenceStripError::Config {
                message: "At least one target file must be listed".to_string(),
            });
        }

        if self.base_directory.as_os_str().is_empty() {
            return Err(FenceStripError::Config {
                message: "Base directory must not be empty".to_string(),
            });
        }

        for name in &self.files {
            if name.trim().is_empty() {
                return Err(FenceStripError::Config {
                    message: "Target file names must not be empty".to_string(),
                });
            }

            // Targets are plain names directly under the base directory.
            let is_plain = name.chars().all(|c| c != '/' && c != '\\')
                && Path::new(name)
                    .components()
                    .all(|c| matches!(c, Component::Normal(_)));

            if !is_plain {
                return Err(FenceStripError::Config {
                    message: format!("Target must be a bare file name: {}", name),
                });
            }
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanupConfig::default();
        assert_eq!(config.files.len(), 15);
        assert_eq!(config.files.first().map(String::as_str), Some("accordion.jsx"));
        assert_eq!(config.files.last().map(String::as_str), Some("textarea.jsx"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_targets_preserve_order() {
        let config = CleanupConfig::new("/tmp/ui", ["b.jsx", "a.jsx"]);
        let targets: Vec<_> = config.targets().collect();

        assert_eq!(targets[0], ("b.jsx", PathBuf::from("/tmp/ui/b.jsx")));
        assert_eq!(targets[1], ("a.jsx", PathBuf::from("/tmp/ui/a.jsx")));
    }

    #[test]
    fn test_config_validation() {
        assert!(CleanupConfig::new("/tmp", Vec::<String>::new()).validate().is_err());
        assert!(CleanupConfig::new("", ["a.jsx"]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", ["  "]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", ["../a.jsx"]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", ["..\\a.jsx"]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", ["sub/a.jsx"]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", [".."]).validate().is_err());
        assert!(CleanupConfig::new("/tmp", ["a.jsx"]).validate().is_ok());
    }

    #[test]
    fn test_toml_rendering() {
        let rendered = CleanupConfig::default().to_toml().unwrap();
        assert!(rendered.contains("base_directory"));
        assert!(rendered.contains("accordion.jsx"));
        assert!(rendered.contains("textarea.jsx"));

        let parsed: CleanupConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, CleanupConfig::default());
    }
}
