//! Sequential composite command with dynamic enablement re-checking.
//!
//! Runs an ordered sequence of commands as one unit. Before each step every
//! not-yet-run command must still report itself runnable, and a notification
//! fired by the currently executing command aborts the remaining steps.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use crate::command::{Command, SharedCommand};
use crate::event::{EnablementChanged, Subscription};
use crate::types::CommandParameter;

/// Ordered group of commands exposed as a single [`Command`].
///
/// The sequence order is fixed at construction and is the execution order.
/// Enablement notifications of contained commands are re-raised unchanged as
/// the composite's own for its whole lifetime.
pub struct CompositeCommand {
    commands: Vec<SharedCommand>,
    enablement_changed: EnablementChanged,
    _relays: Vec<Subscription>,
}

impl CompositeCommand {
    /// Create an empty composite. Always runnable; running it is a no-op.
    pub fn new() -> Self {
        Self::from_commands(std::iter::empty())
    }

    /// Create a composite over a single command.
    pub fn single(command: SharedCommand) -> Self {
        Self::from_commands([Some(command)])
    }

    /// Create a composite over an ordered sequence.
    ///
    /// Absent slots are dropped silently; they are never stored and never
    /// executed.
    pub fn from_commands(commands: impl IntoIterator<Item = Option<SharedCommand>>) -> Self {
        let commands: Vec<SharedCommand> = commands.into_iter().flatten().collect();
        let enablement_changed = EnablementChanged::new();
        let relays = commands
            .iter()
            .map(|command| {
                let event = enablement_changed.clone();
                command.enablement_changed().subscribe(move || event.emit())
            })
            .collect();
        Self {
            commands,
            enablement_changed,
            _relays: relays,
        }
    }

    /// Number of contained commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CompositeCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CompositeCommand {
    /// True iff every contained command can run; true for an empty
    /// composite.
    ///
    /// Every contained command is queried exactly once per call, in sequence
    /// order, with no caching between calls.
    fn can_run(&self, parameter: &CommandParameter) -> bool {
        self.commands
            .iter()
            .fold(true, |all, command| command.can_run(parameter) && all)
    }

    /// Execute the contained commands in sequence order.
    ///
    /// Before each step, every remaining command must report `can_run` true
    /// and the abort flag must be clear; otherwise the run stops normally
    /// with the remaining commands unexecuted. While a command runs, any
    /// firing of its own enablement notification sets the abort flag,
    /// whatever its new `can_run` answer. The abort flag lives in a
    /// per-execution scope, so repeated and re-entrant runs are independent.
    fn run(&self, parameter: &CommandParameter) {
        let abort = Rc::new(Cell::new(false));
        let mut queue: VecDeque<SharedCommand> = self.commands.iter().cloned().collect();

        while !abort.get() && queue.iter().all(|command| command.can_run(parameter)) {
            let Some(command) = queue.pop_front() else {
                break;
            };
            let flag = Rc::clone(&abort);
            let abort_watch = command.enablement_changed().subscribe(move || flag.set(true));
            command.run(parameter);
            drop(abort_watch);
        }

        if !queue.is_empty() {
            debug!(
                remaining = queue.len(),
                aborted = abort.get(),
                "composite run stopped early"
            );
        }
    }

    fn enablement_changed(&self) -> &EnablementChanged {
        &self.enablement_changed
    }
}
