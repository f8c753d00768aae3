//! User confirmation gate behind the command contract.
//!
//! Asks a yes/no style question through the dialog boundary; enablement
//! tracks the last answer, so a composite that contains the gate stops when
//! the user declines.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use relay_core::{Command, CommandParameter, EnablementChanged};

use crate::service::DialogResolver;
use crate::types::{DialogPrompt, DialogResult};

/// Command that asks the user a question and gates execution on the answer.
///
/// Starts enabled ("not yet asked, assume allowed"). Each run shows the
/// stored prompt and recomputes enablement as membership of the outcome in
/// the approvals set; a missing dialog service or a missing outcome counts
/// as "not approved". The notification fires only when the computed value
/// actually differs from the stored one.
pub struct ConfirmCommand {
    prompt: DialogPrompt,
    approvals: Vec<DialogResult>,
    resolver: Rc<dyn DialogResolver>,
    enabled: Cell<bool>,
    enablement_changed: EnablementChanged,
}

impl ConfirmCommand {
    /// Create a gate approving the positive outcomes of a yes/no/ok/cancel
    /// style dialog.
    pub fn new(prompt: DialogPrompt, resolver: Rc<dyn DialogResolver>) -> Self {
        Self::with_approvals(prompt, resolver, vec![DialogResult::Ok, DialogResult::Yes])
    }

    /// Create a gate with a custom approvals set, for specializations that
    /// treat different outcomes as approval.
    pub fn with_approvals(
        prompt: DialogPrompt,
        resolver: Rc<dyn DialogResolver>,
        approvals: Vec<DialogResult>,
    ) -> Self {
        Self {
            prompt,
            approvals,
            resolver,
            enabled: Cell::new(true),
            enablement_changed: EnablementChanged::new(),
        }
    }

    /// Restore enablement so the question can be asked again.
    ///
    /// Notifies only when the gate was actually disabled.
    pub fn reset_enablement(&self) {
        if self.enabled.get() {
            return;
        }
        self.enabled.set(true);
        self.enablement_changed.emit();
    }
}

impl Command for ConfirmCommand {
    /// The last known answer; the parameter plays no role here.
    fn can_run(&self, _parameter: &CommandParameter) -> bool {
        self.enabled.get()
    }

    /// Ask the question through the dialog service.
    ///
    /// The service is resolved fresh on every run, never cached.
    fn run(&self, _parameter: &CommandParameter) {
        let outcome = self
            .resolver
            .resolve()
            .and_then(|dialog| dialog.show(&self.prompt));
        let approved = outcome.map_or(false, |o| self.approvals.contains(&o));
        debug!(?outcome, approved, "confirmation dialog answered");

        if approved == self.enabled.get() {
            return;
        }
        self.enabled.set(approved);
        self.enablement_changed.emit();
    }

    fn enablement_changed(&self) -> &EnablementChanged {
        &self.enablement_changed
    }
}
