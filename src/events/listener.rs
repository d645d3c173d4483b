//! # Listener handles.
//!
//! A [`Listener`] is a shared handle to a callback. Handles are what the
//! registry stores and what [`deafen`](crate::EventManager::deafen) matches
//! against: identity is pointer identity, so keep a clone of the handle if
//! you intend to remove it later.

use std::rc::Rc;

/// Shared handle to an event callback.
///
/// The callback receives the dispatch payload by reference and returns
/// nothing (fire-and-forget). Cloning a `Listener` clones the handle, not
/// the callback; clones compare identical for removal purposes.
pub type Listener<T> = Rc<dyn Fn(&T)>;

/// Builds a [`Listener`] from a closure.
///
/// # Example
/// ```rust
/// use eventry::{listener, Listener};
///
/// let shout: Listener<String> = listener(|msg: &String| println!("{msg}!"));
/// shout(&"hey".to_string());
/// ```
pub fn listener<T, F>(callback: F) -> Listener<T>
where
    F: Fn(&T) + 'static,
{
    Rc::new(callback)
}
