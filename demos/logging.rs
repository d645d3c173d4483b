//! # Logging listener example
//!
//! Feeds dispatches through the built-in [`log_listener`]. Requires the
//! `logging` feature.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example logging --features logging
//! ```

use eventry::{log_listener, EventManager};

fn main() {
    env_logger::init();

    let events = EventManager::new();
    events.listen("progress", &[log_listener("progress")]);

    for step in 1..=3u32 {
        events.dispatch("progress", &(step, 3u32));
    }
}
