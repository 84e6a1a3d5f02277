// mesearch - pick your engines, type once, search everywhere
//
// This is the main entry point. Reads lines from stdin and dispatches each
// one to a handler. One bad line never kills the session.

use console::style;
use mesearch_lib::{
    BrowserLauncher, Dispatcher, EngineStore, Result, SearchEngine, SearchError,
};
use std::io::{self, BufRead};
use std::path::PathBuf;

fn main() -> Result<()> {
    // A corrupt data file is the one startup condition with no fallback
    let mut store = EngineStore::load(data_file_path())?;
    print_engines(&store);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = if let Some(command) = input.strip_prefix('-') {
            handle_command(&mut store, command)
        } else {
            handle_search(&store, input)
        };

        // Commands are isolated: report the failure and keep the loop alive
        if let Err(e) = outcome {
            eprintln!("{}\n", style(e.user_message()).red());
        }
    }

    Ok(())
}

// Usage examples:
//   -setBrowserPath "/usr/bin/brave"
//   -add {"Google", "g", "https://www.google.com/search?q=%s"}
//   -add {"DuckDuckGo", "d", "https://duckduckgo.com/?q=%s"}
//   -add {"Yandex", "ydx", "https://yandex.com/search/?text=%s"}
//   :gd rust btreemap
fn handle_command(store: &mut EngineStore, command: &str) -> Result<()> {
    if command == "list" {
        print_engines(store);
        Ok(())
    } else if let Some(literal) = command.strip_prefix("add") {
        handle_add(store, literal.trim())
    } else if let Some(alias) = command.strip_prefix("rem") {
        handle_remove(store, alias.trim())
    } else if let Some(path) = command.strip_prefix("setBrowserPath") {
        handle_set_browser_path(store, path.trim())
    } else {
        Err(SearchError::InvalidCommand(command.to_string()))
    }
}

fn handle_add(store: &mut EngineStore, literal: &str) -> Result<()> {
    let engine = SearchEngine::parse(literal)?;
    let rendered = engine.to_string();

    match store.add_engine(engine) {
        Ok(()) => {
            println!("Added {}.\n", rendered);
            Ok(())
        }
        Err(e @ (SearchError::DuplicateAlias(_) | SearchError::HashCollision { .. })) => {
            // Show what's already registered before complaining
            print_engines(store);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn handle_remove(store: &mut EngineStore, alias: &str) -> Result<()> {
    let removed = store.remove_engine(alias)?;
    println!("Removed {}.\n", removed);
    Ok(())
}

fn handle_set_browser_path(store: &mut EngineStore, path: &str) -> Result<()> {
    // The path may come in double-quoted; strip a matched pair
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);

    store.set_browser_path(path)?;
    println!("Browser path set to {}.\n", path);
    Ok(())
}

fn handle_search(store: &EngineStore, query: &str) -> Result<()> {
    let launcher = BrowserLauncher;
    Dispatcher::new(store, &launcher).perform_search(query)?;
    println!();
    Ok(())
}

fn print_engines(store: &EngineStore) {
    println!("Available Search Engines:");
    for engine in store.engines() {
        println!("   {}", engine);
    }
    println!();
}

fn data_file_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not find home directory");
    home.join(".mesearch").join("engines.dat")
}
