//! # log_listener — simple dispatch printer.
//!
//! A minimal listener that writes every payload it receives to the [`log`]
//! facade. Use it for test or demo.
//!
//! ## Example output
//! ```text
//! DEBUG eventry: [saved] "report.txt"
//! DEBUG eventry: [progress] (3, 10)
//! ```

use std::fmt;

use crate::events::{listener, Listener};

/// Builds a listener that logs each dispatch payload at `debug` level under
/// target `"eventry"`, tagged with `label`.
///
/// # Example
/// ```rust
/// use eventry::{log_listener, EventManager};
///
/// let events = EventManager::new();
/// events.listen("tick", &[log_listener("tick")]);
/// events.dispatch("tick", &42);
/// ```
pub fn log_listener<T>(label: &str) -> Listener<T>
where
    T: fmt::Debug + 'static,
{
    let label = label.to_string();
    listener(move |args: &T| {
        log::debug!(target: "eventry", "[{label}] {args:?}");
    })
}
