//! Scriptable loader for views and layouts.
//!
//! `MockLoader` resolves every key to a fresh [`Module`] by default. Individual keys can be
//! gated (their loads stay pending until [`MockLoader::release`]) or made to fail. Every call
//! to `load` is counted so tests can assert how many underlying fetches happened.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use slideshow::shell::{error::LoadError, Loader};

use crate::model::{Module, TestModule};

struct MockState<K> {
    failures: HashMap<K, LoadError>,
    gated: HashSet<K>,
    pending: Vec<(K, oneshot::Sender<()>)>,
    calls: HashMap<K, usize>,
}

/// Loader handle; clones share the same state.
pub struct MockLoader<K> {
    state: Rc<RefCell<MockState<K>>>,
}

impl<K> Clone for MockLoader<K> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<K> Default for MockLoader<K>
where
    K: Copy + Eq + Hash + Display + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MockLoader<K>
where
    K: Copy + Eq + Hash + Display + 'static,
{
    /// Create a loader where every key loads immediately and successfully
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                failures: HashMap::new(),
                gated: HashSet::new(),
                pending: Vec::new(),
                calls: HashMap::new(),
            })),
        }
    }

    /// Hold every future load of `key` until it is released
    pub fn gate(&self, key: K) {
        self.state.borrow_mut().gated.insert(key);
    }

    /// Stop gating `key`; loads already pending still need a release
    pub fn ungate(&self, key: K) {
        self.state.borrow_mut().gated.remove(&key);
    }

    /// Make loads of `key` fail with `error` when they complete
    pub fn fail(&self, key: K, error: LoadError) {
        self.state.borrow_mut().failures.insert(key, error);
    }

    /// Make loads of `key` succeed again
    pub fn succeed(&self, key: K) {
        self.state.borrow_mut().failures.remove(&key);
    }

    /// Complete every pending load of `key`.
    ///
    /// # Returns
    /// - `usize` - Number of loads released
    pub fn release(&self, key: K) -> usize {
        let released: Vec<_> = {
            let mut state = self.state.borrow_mut();
            let (released, pending): (Vec<_>, Vec<_>) =
                state.pending.drain(..).partition(|(k, _)| *k == key);
            state.pending = pending;
            released
        };

        let count = released.len();
        for (_, sender) in released {
            let _ = sender.send(());
        }

        count
    }

    /// Number of loads of `key` started so far
    pub fn calls(&self, key: K) -> usize {
        self.state.borrow().calls.get(&key).copied().unwrap_or(0)
    }

    /// Number of loads of `key` waiting for a release
    pub fn pending(&self, key: K) -> usize {
        self.state
            .borrow()
            .pending
            .iter()
            .filter(|(k, _)| *k == key)
            .count()
    }

    /// Shareable trait object for handing to the router
    pub fn as_loader(&self) -> Rc<dyn Loader<K, TestModule>> {
        Rc::new(self.clone())
    }
}

impl<K> Loader<K, TestModule> for MockLoader<K>
where
    K: Copy + Eq + Hash + Display + 'static,
{
    fn load(&self, key: K) -> LocalBoxFuture<'static, Result<TestModule, LoadError>> {
        let (load, gate) = {
            let mut state = self.state.borrow_mut();

            let calls = state.calls.entry(key).or_default();
            *calls += 1;
            let load = *calls;

            let gate = if state.gated.contains(&key) {
                let (sender, receiver) = oneshot::channel();
                state.pending.push((key, sender));
                Some(receiver)
            } else {
                None
            };

            (load, gate)
        };

        let state = self.state.clone();

        async move {
            if let Some(gate) = gate {
                gate.await.map_err(|_| LoadError::Fetch {
                    module: key.to_string(),
                    reason: "load cancelled".to_string(),
                })?;
            }

            if let Some(error) = state.borrow().failures.get(&key) {
                return Err(error.clone());
            }

            Ok(Rc::new(Module {
                name: key.to_string(),
                load,
            }))
        }
        .boxed_local()
    }
}
