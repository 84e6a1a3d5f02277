/// Persistent engine registry
///
/// Handles the in-memory engine map, the browser path, and their
/// synchronization to a single data file.

pub mod format;
pub mod registry;

pub use registry::EngineStore;
