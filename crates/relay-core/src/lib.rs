//! Command abstractions for MVVM-style interactive applications.
//!
//! A [`Command`] is an executable action with an enablement check and a
//! change notification. On top of that contract this crate provides
//! sequential composition with dynamic enablement re-checking
//! ([`CompositeCommand`]), conditional dispatch ([`BranchCommand`]), and a
//! closure-backed leaf ([`FnCommand`]).

pub mod branch;
pub mod command;
pub mod composite;
pub mod error;
pub mod event;
pub mod types;

pub use branch::{BranchCommand, BranchCommandBuilder};
pub use command::{Command, FnCommand, SharedCommand};
pub use composite::CompositeCommand;
pub use error::CommandError;
pub use event::{EnablementChanged, Subscription};
pub use types::CommandParameter;
