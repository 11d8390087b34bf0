//! Explicit engine handle, shared by controls and listeners.
//!
//! The engine is injected, never reached through ambient context: every
//! control and listener takes an `EditorHandle` at construction, scoped to
//! the enclosing editing surface. Tests swap in `harness::ScriptedEngine`
//! through the same seam.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use tracing::debug;
use vellum_core::{EditorEvent, EditorSnapshot, Instruction};

/// The engine as the binding layer sees it.
///
/// `apply` returns the events the instruction produced so the handle can fan
/// them out to listeners; engines that notify out-of-band return nothing and
/// call `EditorHandle::emit` instead.
pub trait PortableTextEngine {
    fn apply(&mut self, instruction: Instruction) -> Vec<EditorEvent>;
    fn snapshot(&self) -> &dyn EditorSnapshot;
}

type Listener = Box<dyn FnMut(&EditorEvent)>;

struct HandleInner {
    engine: Box<dyn PortableTextEngine>,
    /// Slot is `None` only while that listener's callback is executing.
    listeners: Vec<(u64, Option<Listener>)>,
    dead: Vec<u64>,
    queue: VecDeque<EditorEvent>,
    notifying: bool,
    next_listener: u64,
}

impl HandleInner {
    fn sweep(&mut self) {
        if self.notifying || self.dead.is_empty() {
            return;
        }
        let dead = std::mem::take(&mut self.dead);
        self.listeners
            .retain(|(id, slot)| slot.is_some() && !dead.contains(id));
    }
}

/// Shared handle to one editing engine. Single-threaded by contract; clones
/// are cheap and all refer to the same engine.
#[derive(Clone)]
pub struct EditorHandle {
    inner: Rc<RefCell<HandleInner>>,
}

impl EditorHandle {
    pub fn new(engine: impl PortableTextEngine + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HandleInner {
                engine: Box::new(engine),
                listeners: Vec::new(),
                dead: Vec::new(),
                queue: VecDeque::new(),
                notifying: false,
                next_listener: 0,
            })),
        }
    }

    /// Send one instruction, fire-and-forget, then deliver whatever events
    /// it produced.
    pub fn send(&self, instruction: Instruction) {
        debug!(%instruction, "send");
        let events = {
            let mut inner = self.inner.borrow_mut();
            inner.sweep();
            inner.engine.apply(instruction)
        };
        for event in events {
            self.emit(event);
        }
    }

    /// Run `f` against the engine's current snapshot. The borrow ends when
    /// `f` returns; nothing is cached across renders.
    pub fn read<R>(&self, f: impl FnOnce(&dyn EditorSnapshot) -> R) -> R {
        let inner = self.inner.borrow();
        f(inner.engine.snapshot())
    }

    /// Deliver an event to every listener, in subscription order.
    ///
    /// Events emitted while a delivery is already running are queued and
    /// drained by the outer delivery loop, so listeners observe a consistent
    /// order without reentrant callback stacks.
    pub fn emit(&self, event: EditorEvent) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.queue.push_back(event);
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }
        loop {
            let next = self.inner.borrow_mut().queue.pop_front();
            let Some(event) = next else { break };
            self.deliver(&event);
        }
        let mut inner = self.inner.borrow_mut();
        inner.notifying = false;
        inner.sweep();
    }

    fn deliver(&self, event: &EditorEvent) {
        let ids: Vec<u64> = {
            let inner = self.inner.borrow();
            inner.listeners.iter().map(|(id, _)| *id).collect()
        };
        for id in ids {
            // Take the callback out of the slot so it may use the handle
            // reentrantly (read, emit, subscribe, drop its subscription).
            let taken = {
                let mut inner = self.inner.borrow_mut();
                if inner.dead.contains(&id) {
                    None
                } else {
                    inner
                        .listeners
                        .iter_mut()
                        .find(|(lid, _)| *lid == id)
                        .and_then(|(_, slot)| slot.take())
                }
            };
            let Some(mut callback) = taken else { continue };
            callback(event);
            let mut inner = self.inner.borrow_mut();
            if inner.dead.contains(&id) {
                continue; // unsubscribed during its own call
            }
            if let Some((_, slot)) = inner.listeners.iter_mut().find(|(lid, _)| *lid == id) {
                *slot = Some(callback);
            }
        }
    }

    /// Register `callback` on the event feed. Dropping the returned
    /// subscription unsubscribes.
    pub fn subscribe(&self, callback: impl FnMut(&EditorEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Some(Box::new(callback))));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Active registration on an engine handle's event feed; unsubscribes on
/// drop, which is how owning surfaces tear listeners down.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    inner: Weak<RefCell<HandleInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.dead.push(self.id);
            inner.sweep();
        }
    }
}
