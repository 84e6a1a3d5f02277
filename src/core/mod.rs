/// Core functionality modules
///
/// Contains the main business logic for alias hashing, engine records,
/// and query dispatch.

pub mod dispatcher;
pub mod engine;
pub mod hash;

pub use dispatcher::{BrowserLauncher, Dispatcher, Launcher};
pub use engine::SearchEngine;
pub use hash::alias_key;
