//! # Document lifecycle example
//!
//! Wires a couple of listeners to document events and walks through
//! dispatch, targeted removal, and bulk removal.
//!
//! ## Run
//! ```bash
//! cargo run --example document
//! ```

use eventry::{listener, EventManager};

fn main() {
    let events = EventManager::new();

    let autosave = listener(|name: &String| println!("[autosave] {name}"));
    let backup = listener(|name: &String| println!("[backup]   {name}"));

    events
        .listen("changed", &[autosave.clone()])
        .listen("closed", &[backup.clone(), autosave]);

    println!("-- edit --");
    events.dispatch("changed", &"notes.md".to_string());

    println!("-- close --");
    events.dispatch("closed", &"notes.md".to_string());

    // the backup job is done; only autosave stays interested
    events.deafen("closed", &[backup]);
    println!("-- close again --");
    events.dispatch("closed", &"notes.md".to_string());

    events.deafen_all("changed");
    println!("changed listeners left: {}", events.listener_count("changed"));
    println!(
        "dispatch to removed event: {}",
        events.dispatch("changed", &"notes.md".to_string())
    );
}
