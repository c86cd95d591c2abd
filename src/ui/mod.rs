pub mod output;

pub use output::{format_confirmation, OutputFormatter, OutputMode};
