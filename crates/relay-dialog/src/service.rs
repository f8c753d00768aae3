//! Dialog presentation boundary.
//!
//! The toolkit never draws anything itself; it calls through
//! [`MessageDialog`] and lets the host application decide how a prompt is
//! presented. The service is looked up through a [`DialogResolver`] fresh on
//! every execution, so the host can swap or withdraw it at any time.

use std::rc::Rc;

use crate::types::{DialogPrompt, DialogResult};

/// Presents a modal message dialog and reports the user's answer.
pub trait MessageDialog {
    /// Show the prompt and block until the user answers.
    ///
    /// Returns `None` when no outcome could be produced; callers treat that
    /// as "not approved".
    fn show(&self, prompt: &DialogPrompt) -> Option<DialogResult>;
}

/// Produces the dialog service at execution time.
///
/// Returning `None` means no dialog service is currently available.
pub trait DialogResolver {
    fn resolve(&self) -> Option<Rc<dyn MessageDialog>>;
}

/// Resolver that always yields the same dialog service, or none at all.
pub struct StaticResolver {
    dialog: Option<Rc<dyn MessageDialog>>,
}

impl StaticResolver {
    pub fn new(dialog: Rc<dyn MessageDialog>) -> Self {
        Self {
            dialog: Some(dialog),
        }
    }

    /// Resolver standing in for a missing dialog service.
    pub fn unavailable() -> Self {
        Self { dialog: None }
    }
}

impl DialogResolver for StaticResolver {
    fn resolve(&self) -> Option<Rc<dyn MessageDialog>> {
        self.dialog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysYes;

    impl MessageDialog for AlwaysYes {
        fn show(&self, _prompt: &DialogPrompt) -> Option<DialogResult> {
            Some(DialogResult::Yes)
        }
    }

    #[test]
    fn test_static_resolver_yields_its_dialog() {
        let resolver = StaticResolver::new(Rc::new(AlwaysYes));
        let dialog = resolver.resolve().unwrap();
        assert_eq!(
            dialog.show(&DialogPrompt::new("Proceed?")),
            Some(DialogResult::Yes)
        );
    }

    #[test]
    fn test_unavailable_resolver_yields_nothing() {
        assert!(StaticResolver::unavailable().resolve().is_none());
    }
}
