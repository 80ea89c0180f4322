//! A minimal observer pattern for broadcasting events to connected callbacks.
//!
//! Each [`Signal`] is a named broadcast channel for one kind of payload.
//! Observers connect a callback taking the sending object and the payload;
//! emitting the signal invokes every callback synchronously, in registration
//! order. The whole mechanism is single-threaded.
//!
//! ```
//! use hyprlink::signal::Signal;
//!
//! struct Doorbell;
//! let rang: Signal<Doorbell, u32> = Signal::default();
//!
//! let id = rang.connect(|_sender, times| println!("rang {times} times"));
//! rang.emit(&Doorbell, &2);
//! rang.disconnect(id).unwrap();
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;

use thiserror::Error;

/// Handle identifying one observer registration on one [`Signal`].
///
/// Returned by [`Signal::connect`]; the only way to disconnect the observer
/// again. Connecting the same closure twice yields two distinct ids, and the
/// callback runs once per registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from observer management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    /// The given id is not (or no longer) registered on this signal.
    #[error("observer {0} is not connected to this signal")]
    UnknownObserver(ObserverId),
}

struct Observer<S, T> {
    id: ObserverId,
    callback: Box<dyn FnMut(&S, &T)>,
}

/// A broadcast channel carrying payloads of type `T` from a sender of type
/// `S`.
///
/// Not `Sync`: signals use interior mutability and belong to exactly one
/// thread. Connecting or disconnecting observers of a signal from inside one
/// of its own callbacks is unsupported and will panic on the inner borrow.
pub struct Signal<S, T> {
    observers: RefCell<Vec<Observer<S, T>>>,
    next_id: Cell<u64>,
}

impl<S, T> Default for Signal<S, T> {
    fn default() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }
}

impl<S, T> fmt::Debug for Signal<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl<S, T> Signal<S, T> {
    /// Connects `callback` to this signal and returns its registration id.
    ///
    /// Callbacks are invoked with the sender first and the event payload
    /// second. Duplicates are allowed: every registration is invoked once per
    /// emission, in the order the registrations were made.
    pub fn connect(&self, callback: impl FnMut(&S, &T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push(Observer {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Disconnects the registration identified by `id`.
    ///
    /// Fails with [`SignalError::UnknownObserver`] if `id` was never
    /// connected to this signal, or has already been disconnected.
    pub fn disconnect(&self, id: ObserverId) -> Result<(), SignalError> {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|observer| observer.id == id) {
            Some(index) => {
                observers.remove(index);
                Ok(())
            }
            None => Err(SignalError::UnknownObserver(id)),
        }
    }

    /// Whether any observer is currently connected.
    ///
    /// The watch loop checks this before decoding an event's payload, so an
    /// event nobody listens to costs a lookup and nothing else.
    pub fn has_observers(&self) -> bool {
        !self.observers.borrow().is_empty()
    }

    /// Number of currently connected observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Invokes every connected callback with `sender` and `payload`, in
    /// registration order.
    ///
    /// A panicking callback unwinds out of `emit` and delivery to the
    /// remaining observers is aborted.
    pub fn emit(&self, sender: &S, payload: &T) {
        for observer in self.observers.borrow_mut().iter_mut() {
            (observer.callback)(sender, payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Sender;

    #[test]
    fn emits_to_observers_in_connect_order() {
        let signal: Signal<Sender, u32> = Signal::default();
        let seen: Rc<RefCell<Vec<(u32, u32)>>> = Rc::default();

        let first = Rc::clone(&seen);
        signal.connect(move |_, value| first.borrow_mut().push((1, *value)));
        let second = Rc::clone(&seen);
        signal.connect(move |_, value| second.borrow_mut().push((2, *value)));

        signal.emit(&Sender, &7);
        assert_eq!(*seen.borrow(), vec![(1, 7), (2, 7)]);
    }

    #[test]
    fn duplicate_registrations_fire_once_each() {
        let signal: Signal<Sender, ()> = Signal::default();
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        let callback = move |_: &Sender, _: &()| counter.set(counter.get() + 1);
        signal.connect(callback.clone());
        signal.connect(callback);

        signal.emit(&Sender, &());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn disconnect_removes_single_registration() {
        let signal: Signal<Sender, ()> = Signal::default();
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        let keep = signal.connect(move |_, _| counter.set(counter.get() + 1));
        let gone = signal.connect(|_, _| panic!("disconnected observer ran"));
        signal.disconnect(gone).unwrap();

        signal.emit(&Sender, &());
        assert_eq!(calls.get(), 1);
        assert!(signal.has_observers());

        signal.disconnect(keep).unwrap();
        assert!(!signal.has_observers());
    }

    #[test]
    fn disconnect_unknown_id_fails() {
        let signal: Signal<Sender, ()> = Signal::default();
        let id = signal.connect(|_, _| {});
        signal.disconnect(id).unwrap();
        assert_eq!(signal.disconnect(id), Err(SignalError::UnknownObserver(id)));
    }

    #[test]
    fn emit_without_observers_is_a_no_op() {
        let signal: Signal<Sender, u32> = Signal::default();
        assert!(!signal.has_observers());
        assert_eq!(signal.observer_count(), 0);
        signal.emit(&Sender, &1);
    }
}
