pub mod cleaner;
pub mod fence;
pub mod store;

pub use cleaner::{Cleaner, CleanupReport, FileOutcome};
pub use fence::{strip_fences, strip_fences_with_outcome, FencePatterns, StripOutcome};
pub use store::{DiskStore, FileStore, MemoryStore, StoreAccess};
