//! # Event registry: named events with ordered listener sequences.
//!
//! [`EventManager`] owns a mapping from event name to an ordered sequence of
//! [`Listener`] handles. All operations (listen, listen-once, deafen,
//! dispatch, query) act on this one structure.
//!
//! ## Rules
//! - A key present in the map always holds a **non-empty** sequence; when a
//!   removal would leave a sequence empty, the key is deleted outright.
//! - Listener order within a sequence is insertion order; dispatch invokes
//!   listeners in that order.
//! - Listener identity is `Rc` pointer identity; keep a clone of the handle
//!   you registered if you intend to [`deafen`](EventManager::deafen) it.
//!
//! ## Dispatch flow
//! ```text
//!   dispatch("save", &args)
//!        │ clone the "save" sequence (Rc handle clones), release borrow
//!        ▼
//!   [ a, b, c ]  ──► a(&args) ──► b(&args) ──► c(&args)
//! ```
//!
//! The snapshot makes dispatch robust against listeners that mutate the
//! registry mid-pass: mutations land in the map immediately, but the pass in
//! flight keeps iterating the sequence it started with.

use std::cell::{OnceCell, RefCell};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::listener::Listener;

type EventMap<T> = HashMap<String, Vec<Listener<T>>>;

/// Registry of named events and their listeners.
///
/// `T` is the dispatch payload type, shared by every event in the registry;
/// pick a tuple, enum, or dynamic list to carry whatever your events need.
/// Every listener receives the payload by reference.
///
/// All methods take `&self` (interior mutability), and every mutating method
/// returns `&Self` so calls chain. The registry is single-threaded by
/// construction (`Rc` + `RefCell`, neither `Send` nor `Sync`); a
/// multi-threaded embedder must serialize access at its own boundary.
///
/// Cloning an `EventManager` yields another handle to the **same** registry
/// (cheap pointer clone); use [`EventManager::new`] for an independent one.
///
/// # Example
/// ```rust
/// use eventry::{listener, EventManager};
///
/// let events = EventManager::new();
/// let greet = listener(|name: &String| println!("hello, {name}"));
///
/// events.listen("join", &[greet.clone()]);
/// assert!(events.dispatch("join", &"ada".to_string()));
///
/// events.deafen("join", &[greet]);
/// assert!(!events.has_listeners("join"));
/// ```
pub struct EventManager<T> {
    events: Rc<RefCell<EventMap<T>>>,
}

impl<T: 'static> EventManager<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Appends `listeners` to the sequence for `event`, creating the entry
    /// if absent.
    ///
    /// No-op when `listeners` is empty; no entry is created. Duplicates are
    /// kept: registering the same handle twice means it runs twice per
    /// dispatch.
    ///
    /// # Example
    /// ```rust
    /// use eventry::{listener, EventManager};
    ///
    /// let events = EventManager::new();
    /// let audit = listener(|id: &u64| println!("user {id} changed"));
    ///
    /// events
    ///     .listen("created", &[audit.clone()])
    ///     .listen("deleted", &[audit]);
    /// assert!(events.has_listeners("created"));
    /// assert!(events.has_listeners("deleted"));
    /// ```
    pub fn listen(&self, event: impl Into<String>, listeners: &[Listener<T>]) -> &Self {
        if listeners.is_empty() {
            return self;
        }
        let event = event.into();
        log::trace!(target: "eventry", "listen: +{} listener(s) for {event:?}", listeners.len());
        let mut events = self.events.borrow_mut();
        match events.entry(event) {
            Entry::Occupied(mut seq) => seq.get_mut().extend(listeners.iter().cloned()),
            Entry::Vacant(slot) => {
                slot.insert(listeners.to_vec());
            }
        }
        self
    }

    /// Like [`listen`](Self::listen), but each listener is deregistered
    /// immediately before its first invocation.
    ///
    /// What gets stored is a self-removing adapter, not the original handle:
    /// `deafen` with the original handle will not match it. The adapter
    /// removes itself *before* delegating, so a listener that re-dispatches
    /// its own event does not re-invoke itself.
    ///
    /// # Example
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use eventry::{listener, EventManager};
    ///
    /// let events = EventManager::new();
    /// let fired = Rc::new(Cell::new(0));
    /// let once = {
    ///     let fired = Rc::clone(&fired);
    ///     listener(move |_: &()| fired.set(fired.get() + 1))
    /// };
    /// events.listen_once("ready", &[once]);
    ///
    /// events.dispatch("ready", &());
    /// events.dispatch("ready", &());
    /// assert_eq!(fired.get(), 1);
    /// assert!(!events.has_listeners("ready"));
    /// ```
    pub fn listen_once(&self, event: impl Into<String>, listeners: &[Listener<T>]) -> &Self {
        let event = event.into();
        let wrapped: Vec<Listener<T>> = listeners
            .iter()
            .map(|inner| self.once_adapter(event.clone(), Rc::clone(inner)))
            .collect();
        self.listen(event, &wrapped)
    }

    /// Removes every occurrence of every handle in `listeners` from the
    /// sequence for `event`, by pointer identity.
    ///
    /// No-op if no entry exists for `event` or none of the handles match.
    /// Deletes the event key when the sequence ends up empty.
    ///
    /// # Example
    /// ```rust
    /// use eventry::{listener, EventManager};
    ///
    /// let events = EventManager::new();
    /// let probe = listener(|_: &()| {});
    /// events.listen("ping", &[probe.clone(), probe.clone()]);
    ///
    /// events.deafen("ping", &[probe]);
    /// assert!(!events.has_listeners("ping"));
    /// ```
    pub fn deafen(&self, event: &str, listeners: &[Listener<T>]) -> &Self {
        Self::remove_from(&self.events, event, listeners);
        self
    }

    /// Removes the event key and its entire listener sequence. No-op if
    /// absent.
    pub fn deafen_all(&self, event: &str) -> &Self {
        self.events.borrow_mut().remove(event);
        self
    }

    /// Invokes every listener currently registered for `event`, in
    /// registration order, with `args`, synchronously on the calling thread.
    ///
    /// Returns `true` iff an entry existed for `event`.
    ///
    /// The sequence is snapshotted (cheap handle clones) before the pass and
    /// the interior borrow is released, so listeners may mutate the registry
    /// freely, including re-entrant dispatch. Mutations take effect in the
    /// map at once, but the pass in flight iterates the snapshot: a listener
    /// added for `event` mid-pass first runs on the next dispatch, and one
    /// removed mid-pass still runs in the current one.
    ///
    /// A panicking listener is not caught: the panic unwinds to the caller
    /// and the remaining listeners of the pass do not run. The registry
    /// stays consistent and usable afterwards.
    ///
    /// # Example
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use eventry::{listener, EventManager};
    ///
    /// let events = EventManager::new();
    /// let total = Rc::new(Cell::new(0u32));
    /// let adder = {
    ///     let total = Rc::clone(&total);
    ///     listener(move |n: &u32| total.set(total.get() + n))
    /// };
    /// events.listen("add", &[adder]);
    ///
    /// assert!(events.dispatch("add", &2));
    /// assert!(events.dispatch("add", &3));
    /// assert!(!events.dispatch("sub", &1));
    /// assert_eq!(total.get(), 5);
    /// ```
    pub fn dispatch(&self, event: &str, args: &T) -> bool {
        let snapshot = self.events.borrow().get(event).cloned();
        match snapshot {
            Some(listeners) => {
                log::trace!(
                    target: "eventry",
                    "dispatch {event:?} to {} listener(s)",
                    listeners.len()
                );
                for listener in &listeners {
                    listener(args);
                }
                true
            }
            None => false,
        }
    }

    /// Returns `true` iff at least one listener is registered for `event`.
    #[must_use]
    pub fn has_listeners(&self, event: &str) -> bool {
        self.events.borrow().contains_key(event)
    }

    /// Number of listeners currently registered for `event` (0 if absent).
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.borrow().get(event).map_or(0, Vec::len)
    }

    /// Wraps `inner` in an adapter that removes itself from the registry
    /// before delegating.
    ///
    /// The adapter captures only weak references (to the event map and to
    /// itself, declare-then-assign through a `OnceCell` slot), so it forms
    /// no `Rc` cycles. While the adapter is being invoked the dispatch
    /// snapshot keeps it alive, so the self-upgrade always succeeds there.
    fn once_adapter(&self, event: String, inner: Listener<T>) -> Listener<T> {
        let registry = Rc::downgrade(&self.events);
        let slot: Rc<OnceCell<Weak<dyn Fn(&T)>>> = Rc::new(OnceCell::new());
        let cell = Rc::clone(&slot);
        let adapter: Listener<T> = Rc::new(move |args: &T| {
            let me = cell.get().and_then(Weak::upgrade);
            if let (Some(me), Some(registry)) = (me, registry.upgrade()) {
                Self::remove_from(&registry, &event, &[me]);
            }
            inner(args);
        });
        let _ = slot.set(Rc::downgrade(&adapter));
        adapter
    }

    fn remove_from(events: &RefCell<EventMap<T>>, event: &str, targets: &[Listener<T>]) {
        let mut events = events.borrow_mut();
        if let Some(seq) = events.get_mut(event) {
            seq.retain(|kept| !targets.iter().any(|target| Rc::ptr_eq(kept, target)));
            if seq.is_empty() {
                events.remove(event);
            }
        }
    }
}

impl<T: 'static> Default for EventManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventManager<T> {
    /// Returns another handle to the same registry.
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T> fmt::Debug for EventManager<T> {
    /// Renders event names with their listener counts; the callables
    /// themselves are opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = self.events.borrow();
        let mut map = f.debug_map();
        for (event, seq) in events.iter() {
            map.entry(event, &seq.len());
        }
        map.finish()
    }
}
