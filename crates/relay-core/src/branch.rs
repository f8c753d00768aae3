//! Conditional dispatch between two optional commands.

use crate::command::{Command, SharedCommand};
use crate::error::CommandError;
use crate::event::EnablementChanged;
use crate::types::CommandParameter;

type Condition = Box<dyn Fn(&CommandParameter) -> bool>;

/// Command that evaluates a condition at run time and routes to one of two
/// optional branches.
///
/// Enablement is not meaningful here: `can_run` is always true because the
/// condition may depend on side effects observable only at run time, so the
/// real decision happens inside `run`. A missing branch is a safe no-op.
pub struct BranchCommand {
    condition: Condition,
    when_true: Option<SharedCommand>,
    when_false: Option<SharedCommand>,
    enablement_changed: EnablementChanged,
}

impl BranchCommand {
    /// Create a branch from a condition and its optional branches.
    pub fn new(
        condition: impl Fn(&CommandParameter) -> bool + 'static,
        when_true: Option<SharedCommand>,
        when_false: Option<SharedCommand>,
    ) -> Self {
        Self {
            condition: Box::new(condition),
            when_true,
            when_false,
            enablement_changed: EnablementChanged::new(),
        }
    }

    pub fn builder() -> BranchCommandBuilder {
        BranchCommandBuilder::default()
    }
}

impl std::fmt::Debug for BranchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchCommand")
            .field("when_true", &self.when_true.is_some())
            .field("when_false", &self.when_false.is_some())
            .finish_non_exhaustive()
    }
}

impl Command for BranchCommand {
    fn can_run(&self, _parameter: &CommandParameter) -> bool {
        true
    }

    fn run(&self, parameter: &CommandParameter) {
        let branch = if (self.condition)(parameter) {
            self.when_true.as_ref()
        } else {
            self.when_false.as_ref()
        };
        if let Some(command) = branch {
            command.run(parameter);
        }
    }

    /// Never raised; present for contract compatibility.
    fn enablement_changed(&self) -> &EnablementChanged {
        &self.enablement_changed
    }
}

/// Builder for [`BranchCommand`]. The condition is the only required field.
#[derive(Default)]
pub struct BranchCommandBuilder {
    condition: Option<Condition>,
    when_true: Option<SharedCommand>,
    when_false: Option<SharedCommand>,
}

impl BranchCommandBuilder {
    pub fn condition(mut self, condition: impl Fn(&CommandParameter) -> bool + 'static) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    pub fn when_true(mut self, command: SharedCommand) -> Self {
        self.when_true = Some(command);
        self
    }

    pub fn when_false(mut self, command: SharedCommand) -> Self {
        self.when_false = Some(command);
        self
    }

    /// Build the command, failing when no condition was supplied.
    pub fn build(self) -> Result<BranchCommand, CommandError> {
        let condition = self.condition.ok_or(CommandError::MissingCondition)?;
        Ok(BranchCommand {
            condition,
            when_true: self.when_true,
            when_false: self.when_false,
            enablement_changed: EnablementChanged::new(),
        })
    }
}
