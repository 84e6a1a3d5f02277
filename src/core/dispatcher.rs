/// Query dispatch
///
/// Turns a `:aliases search text` line into one browser launch per selected
/// engine, in selector order.

use crate::error::{Result, SearchError};
use crate::store::EngineStore;
use console::style;
use std::process::{Command, Stdio};

/// The launch capability: start the browser with a URL as its single argument
///
/// Fire-and-forget; implementations must not wait on or supervise the
/// spawned process.
pub trait Launcher {
    fn launch(&self, browser_path: &str, url: &str) -> Result<()>;
}

/// Spawns the configured browser executable without waiting on it
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn launch(&self, browser_path: &str, url: &str) -> Result<()> {
        Command::new(browser_path)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

/// Handles search query dispatch against a loaded engine store
pub struct Dispatcher<'a, L> {
    store: &'a EngineStore,
    launcher: &'a L,
}

impl<'a, L: Launcher> Dispatcher<'a, L> {
    /// Create a new dispatcher instance
    pub fn new(store: &'a EngineStore, launcher: &'a L) -> Self {
        Self { store, launcher }
    }

    /// Perform one search dispatch
    ///
    /// The query must be in the format `:aliases search text`. The selector
    /// between the colon and the first space is lower-cased and split into
    /// alias tokens: on commas if any are present (empty tokens dropped),
    /// otherwise one token per character. Each selected engine gets one
    /// launch, in order.
    ///
    /// A missing browser path is the one soft condition here: it prints
    /// guidance and returns without error. An unknown alias fails the
    /// dispatch at that token's turn; launches already issued for earlier
    /// tokens are not rolled back.
    ///
    /// # Arguments
    /// * `query` - Raw input line, e.g. `:gd rust btreemap`
    pub fn perform_search(&self, query: &str) -> Result<()> {
        let Some(browser_path) = self.store.browser_path() else {
            println!(
                "{}",
                style("Browser path not set. Set it with the -setBrowserPath command.").red()
            );
            return Ok(());
        };

        let (selector, search) = query
            .strip_prefix(':')
            .and_then(|rest| rest.split_once(' '))
            .ok_or_else(|| SearchError::InvalidQuery(query.to_string()))?;
        let aliases = split_selector(&selector.to_lowercase());

        for alias in &aliases {
            let engine = self
                .store
                .get(alias)
                .ok_or_else(|| SearchError::NotFound(alias.clone()))?;
            let url = engine.query_url(search);

            println!(
                "[{}]: {}",
                style(format!("{:<15}", engine.name)).cyan(),
                url
            );
            self.launcher.launch(browser_path, &url)?;
        }

        Ok(())
    }
}

// Comma form picks exact aliases; the no-comma form always splits into
// single characters, so multi-character aliases need the comma form.
fn split_selector(selector: &str) -> Vec<String> {
    if selector.contains(',') {
        selector
            .split(',')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        selector.chars().map(|c| c.to_string()).collect()
    }
}
