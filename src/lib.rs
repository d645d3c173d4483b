//! # eventry
//!
//! **Eventry** is a minimal in-process publish/subscribe registry for Rust.
//!
//! Callers register named event listeners, dispatch named events with an
//! arbitrary payload, and remove listeners individually, in bulk, or after a
//! single invocation. The crate is designed as a building block: there is no
//! runtime, no threads, no queues, just a registry and synchronous calls.
//!
//! ## Architecture
//! ```text
//!   listen("save", &[a, b])            dispatch("save", &args)
//!         │                                  │
//!         ▼                                  ▼
//!   ┌─────────────────────────────────────────────────┐
//!   │ EventManager<T>                                 │
//!   │   "save" ──► [ a, b ]      (insertion order)    │
//!   │   "load" ──► [ c ]                              │
//!   └─────────────────────────────────────────────────┘
//!                                            │ snapshot of [ a, b ]
//!                                            ▼
//!                                      a(&args) ──► b(&args)
//! ```
//!
//! ## Rules
//! - **Ordered**: listeners run in registration order, synchronously, on the
//!   calling thread.
//! - **Snapshot dispatch**: a pass iterates the sequence as it was when the
//!   pass started; listeners may mutate the registry mid-pass without
//!   breaking iteration.
//! - **Identity removal**: [`deafen`](EventManager::deafen) matches listener
//!   handles by pointer identity; keep a clone of what you registered.
//! - **No empty entries**: an event key disappears with its last listener;
//!   [`has_listeners`](EventManager::has_listeners) is exactly "is the key
//!   present".
//! - **No error isolation**: a panicking listener unwinds to the dispatch
//!   caller and ends the pass.
//!
//! ## Features
//! | Area            | Description                                            | Key items                        |
//! |-----------------|--------------------------------------------------------|----------------------------------|
//! | **Registry**    | Register, remove, and dispatch named event listeners.  | [`EventManager`]                 |
//! | **Handles**     | Shared callback handles with identity-based removal.   | [`Listener`], [`listener`]       |
//! | **Once**        | Listeners that deregister before their first call.     | [`EventManager::listen_once`]    |
//! | **Queries**     | Presence and count introspection.                      | [`EventManager::has_listeners`], [`EventManager::listener_count`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`log_listener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use eventry::{listener, EventManager};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let saved = {
//!     let log = Rc::clone(&log);
//!     listener(move |path: &String| log.borrow_mut().push(format!("saved {path}")))
//! };
//! let synced = {
//!     let log = Rc::clone(&log);
//!     listener(move |path: &String| log.borrow_mut().push(format!("synced {path}")))
//! };
//! let banner = {
//!     let log = Rc::clone(&log);
//!     listener(move |_: &String| log.borrow_mut().push("first save only".into()))
//! };
//!
//! let events = EventManager::new();
//! events
//!     .listen("save", &[saved.clone(), synced])
//!     .listen_once("save", &[banner]);
//!
//! assert!(events.dispatch("save", &"a.txt".to_string()));
//! assert!(events.dispatch("save", &"b.txt".to_string()));
//!
//! events.deafen("save", &[saved]);
//! assert!(events.dispatch("save", &"c.txt".to_string()));
//!
//! assert_eq!(
//!     *log.borrow(),
//!     vec![
//!         "saved a.txt", "synced a.txt", "first save only",
//!         "saved b.txt", "synced b.txt",
//!         "synced c.txt",
//!     ]
//! );
//! ```

mod events;

// ---- Public re-exports ----

pub use events::{listener, EventManager, Listener};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
mod listeners;
#[cfg(feature = "logging")]
pub use listeners::log_listener;
