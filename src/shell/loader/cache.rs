use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use dioxus_logger::tracing;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;

use crate::shell::{error::LoadError, loader::Loader};

type SharedLoad<C> = Shared<LocalBoxFuture<'static, Result<C, LoadError>>>;

enum Slot<C> {
    Loading(SharedLoad<C>),
    Ready(C),
}

enum Pending<C> {
    Ready(C),
    Loading(SharedLoad<C>),
}

/// Memoizing front for a [`Loader`].
///
/// Each key moves through three states: absent, loading and ready. The first request for an
/// absent key starts a load and records it as in flight; every request made while it is in
/// flight awaits that same load. A successful load is cached forever. A failed load is
/// dropped so that the next request fetches again, all waiters of the failed load receive the
/// same error.
///
/// The cache is single-threaded and is shared through `&self`.
pub struct LazyCache<K, C> {
    loader: Rc<dyn Loader<K, C>>,
    slots: RefCell<HashMap<K, Slot<C>>>,
}

impl<K, C> LazyCache<K, C>
where
    K: Copy + Eq + Hash + Debug + 'static,
    C: Clone + 'static,
{
    /// Create an empty cache in front of `loader`
    pub fn new(loader: Rc<dyn Loader<K, C>>) -> Self {
        Self {
            loader,
            slots: RefCell::new(HashMap::new()),
        }
    }

    /// Get the component for `key`, loading it if necessary.
    ///
    /// The request is registered when this method is called, not when the returned future is
    /// first polled, so two calls made back to back share one load even before either is
    /// awaited.
    pub fn get(&self, key: K) -> impl Future<Output = Result<C, LoadError>> + '_ {
        let pending = self.start(key);

        async move {
            let load = match pending {
                Pending::Ready(component) => return Ok(component),
                Pending::Loading(load) => load,
            };

            let result = load.clone().await;
            self.settle(key, &load, &result);
            result
        }
    }

    /// Whether `key` has been loaded successfully
    pub fn is_loaded(&self, key: K) -> bool {
        matches!(self.slots.borrow().get(&key), Some(Slot::Ready(_)))
    }

    /// Whether a load for `key` is in flight
    pub fn is_loading(&self, key: K) -> bool {
        matches!(self.slots.borrow().get(&key), Some(Slot::Loading(_)))
    }

    fn start(&self, key: K) -> Pending<C> {
        let mut slots = self.slots.borrow_mut();

        match slots.get(&key) {
            Some(Slot::Ready(component)) => Pending::Ready(component.clone()),
            Some(Slot::Loading(load)) => {
                tracing::debug!(?key, "joining in-flight load");
                Pending::Loading(load.clone())
            }
            None => {
                tracing::debug!(?key, "starting load");
                let load = self.loader.load(key).shared();
                slots.insert(key, Slot::Loading(load.clone()));
                Pending::Loading(load)
            }
        }
    }

    /// Record the outcome of `load` unless the slot has already moved on.
    ///
    /// Every waiter of a shared load calls this, only the first one finds its own load still
    /// in the slot.
    fn settle(&self, key: K, load: &SharedLoad<C>, result: &Result<C, LoadError>) {
        let mut slots = self.slots.borrow_mut();

        let owns_slot = matches!(slots.get(&key), Some(Slot::Loading(current)) if current.ptr_eq(load));
        if !owns_slot {
            return;
        }

        match result {
            Ok(component) => {
                tracing::debug!(?key, "load complete");
                slots.insert(key, Slot::Ready(component.clone()));
            }
            Err(err) => {
                tracing::warn!(?key, "load failed, will retry on next request: {}", err);
                slots.remove(&key);
            }
        }
    }
}
