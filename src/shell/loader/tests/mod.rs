
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::shell::{error::LoadError, loader::Loader};

/// Loader whose loads complete only when the test releases them.
#[derive(Default)]
struct GateLoader {
    calls: RefCell<HashMap<u8, usize>>,
    gates: RefCell<Vec<(u8, oneshot::Sender<Result<Rc<String>, LoadError>>)>>,
}

impl GateLoader {
    fn calls(&self, key: u8) -> usize {
        self.calls.borrow().get(&key).copied().unwrap_or(0)
    }

    /// Complete every pending load for `key` with `result`
    fn release(&self, key: u8, result: Result<Rc<String>, LoadError>) {
        let mut gates = self.gates.borrow_mut();
        let (matching, rest): (Vec<_>, Vec<_>) = gates.drain(..).partition(|(k, _)| *k == key);
        *gates = rest;

        for (_, sender) in matching {
            let _ = sender.send(result.clone());
        }
    }
}

impl Loader<u8, Rc<String>> for Rc<GateLoader> {
    fn load(&self, key: u8) -> LocalBoxFuture<'static, Result<Rc<String>, LoadError>> {
        *self.calls.borrow_mut().entry(key).or_default() += 1;

        let (sender, receiver) = oneshot::channel();
        self.gates.borrow_mut().push((key, sender));

        async move {
            receiver.await.unwrap_or_else(|_| {
                Err(LoadError::Fetch {
                    module: key.to_string(),
                    reason: "cancelled".to_string(),
                })
            })
        }
        .boxed_local()
    }
}

fn module(name: &str) -> Result<Rc<String>, LoadError> {
    Ok(Rc::new(name.to_string()))
}

fn fetch_error(key: u8) -> LoadError {
    LoadError::Fetch {
        module: key.to_string(),
        reason: "connection reset".to_string(),
    }
}
