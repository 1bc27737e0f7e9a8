use std::cell::RefCell;

use slideshow::shell::{error::MountError, Host, Shell};

/// Host page double recording what was mounted where.
#[derive(Default)]
pub struct FakeHost {
    anchors: Vec<String>,
    mounted: RefCell<Vec<(String, Shell)>>,
}

impl FakeHost {
    /// Host page containing one element with id `anchor`
    pub fn with_anchor(anchor: &str) -> Self {
        Self {
            anchors: vec![anchor.to_string()],
            mounted: RefCell::new(Vec::new()),
        }
    }

    /// Host page without any anchor element
    pub fn empty() -> Self {
        Self::default()
    }

    /// Anchors the application was attached to, in order
    pub fn mounted_at(&self) -> Vec<String> {
        self.mounted
            .borrow()
            .iter()
            .map(|(anchor, _)| anchor.clone())
            .collect()
    }

    /// Shell attached most recently
    pub fn last_mounted(&self) -> Option<Shell> {
        self.mounted
            .borrow()
            .last()
            .map(|(_, shell)| shell.clone())
    }
}

impl Host for FakeHost {
    fn has_anchor(&self, anchor_id: &str) -> bool {
        self.anchors.iter().any(|anchor| anchor == anchor_id)
    }

    fn attach(&self, anchor_id: &str, shell: Shell) -> Result<(), MountError> {
        self.mounted
            .borrow_mut()
            .push((anchor_id.to_string(), shell));

        Ok(())
    }
}
