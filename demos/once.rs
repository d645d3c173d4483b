//! # Once-listener example
//!
//! A greeting that fires on the first login only, next to a listener that
//! stays registered.
//!
//! ## Run
//! ```bash
//! cargo run --example once
//! ```

use eventry::{listener, EventManager};

fn main() {
    let events = EventManager::new();

    let greeter = listener(|user: &String| println!("welcome aboard, {user}!"));
    let tracker = listener(|user: &String| println!("login: {user}"));

    events
        .listen("login", &[tracker])
        .listen_once("login", &[greeter]);

    events.dispatch("login", &"ada".to_string());
    events.dispatch("login", &"ada".to_string());

    println!("listeners left: {}", events.listener_count("login"));
}
