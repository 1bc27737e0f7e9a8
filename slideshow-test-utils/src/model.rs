use std::rc::Rc;

/// Component handle produced by [`MockLoader`](crate::MockLoader).
///
/// Each load creates a new `Rc`, so `Rc::ptr_eq` tells whether two resolutions share one load.
pub type TestModule = Rc<Module>;

#[derive(Debug, PartialEq, Eq)]
pub struct Module {
    /// Name of the view or layout the module was loaded for
    pub name: String,
    /// Which load of this key produced the module, starting at 1
    pub load: usize,
}
