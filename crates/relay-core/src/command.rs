//! The command contract shared by every actionable unit.
//!
//! A command is an executable action with an enablement check. Implementors
//! own their enablement state and announce possible changes through their
//! [`EnablementChanged`] event.

use std::cell::Cell;
use std::rc::Rc;

use crate::event::EnablementChanged;
use crate::types::CommandParameter;

/// An executable action with an enablement check.
pub trait Command {
    /// Query whether the command may currently execute. Pure; no side
    /// effects.
    fn can_run(&self, parameter: &CommandParameter) -> bool;

    /// Execute the command. May change the command's own future `can_run`
    /// answer.
    fn run(&self, parameter: &CommandParameter);

    /// The command's enablement notification channel.
    ///
    /// Fired by the command itself whenever its `can_run` answer may have
    /// changed.
    fn enablement_changed(&self) -> &EnablementChanged;
}

/// Shared handle to a command.
///
/// Commands are single-threaded; the caller may keep holding a unit that a
/// composite also contains.
pub type SharedCommand = Rc<dyn Command>;

/// Closure-backed leaf command with an explicit enablement flag.
pub struct FnCommand {
    action: Box<dyn Fn(&CommandParameter)>,
    enabled: Cell<bool>,
    enablement_changed: EnablementChanged,
}

impl FnCommand {
    /// Create an enabled command that invokes `action` on every run.
    pub fn new(action: impl Fn(&CommandParameter) + 'static) -> Self {
        Self {
            action: Box::new(action),
            enabled: Cell::new(true),
            enablement_changed: EnablementChanged::new(),
        }
    }

    /// Set the enablement flag, notifying subscribers only on an actual
    /// transition.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.replace(enabled) != enabled {
            self.enablement_changed.emit();
        }
    }

    /// Raise the enablement notification unconditionally.
    pub fn notify_enablement_changed(&self) {
        self.enablement_changed.emit();
    }
}

impl Command for FnCommand {
    fn can_run(&self, _parameter: &CommandParameter) -> bool {
        self.enabled.get()
    }

    fn run(&self, parameter: &CommandParameter) {
        (self.action)(parameter);
    }

    fn enablement_changed(&self) -> &EnablementChanged {
        &self.enablement_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_new_command_is_enabled() {
        let command = FnCommand::new(|_| {});
        assert!(command.can_run(&CommandParameter::none()));
    }

    #[test]
    fn test_run_invokes_action_with_parameter() {
        let seen: Rc<RefCell<Vec<CommandParameter>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let command = FnCommand::new(move |p| sink.borrow_mut().push(p.clone()));

        let parameter = CommandParameter::from(json!("payload"));
        command.run(&parameter);

        assert_eq!(seen.borrow().as_slice(), &[parameter]);
    }

    #[test]
    fn test_set_enabled_notifies_on_transition() {
        let command = FnCommand::new(|_| {});
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        let _sub = command
            .enablement_changed()
            .subscribe(move || count.set(count.get() + 1));

        command.set_enabled(false);
        assert!(!command.can_run(&CommandParameter::none()));
        assert_eq!(fired.get(), 1);

        command.set_enabled(true);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_set_enabled_same_value_does_not_notify() {
        let command = FnCommand::new(|_| {});
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        let _sub = command
            .enablement_changed()
            .subscribe(move || count.set(count.get() + 1));

        command.set_enabled(true);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_notify_fires_without_state_change() {
        let command = FnCommand::new(|_| {});
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        let _sub = command
            .enablement_changed()
            .subscribe(move || count.set(count.get() + 1));

        command.notify_enablement_changed();
        assert!(command.can_run(&CommandParameter::none()));
        assert_eq!(fired.get(), 1);
    }
}
