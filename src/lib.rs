/// mesearch library
///
/// Core functionality for the multi-engine search launcher.

pub mod core;
pub mod error;
pub mod store;

// Re-exports for convenience
pub use crate::core::{BrowserLauncher, Dispatcher, Launcher, SearchEngine};
pub use error::{Result, SearchError};
pub use store::EngineStore;
