//! Dialog-backed confirmation for the command toolkit.
//!
//! Defines the dialog presentation boundary (an opaque service behind
//! [`MessageDialog`], resolved fresh at execution time) and the
//! [`ConfirmCommand`] gate that binds a user's answer to command enablement.

pub mod confirm;
pub mod service;
pub mod types;

pub use confirm::ConfirmCommand;
pub use service::{DialogResolver, MessageDialog, StaticResolver};
pub use types::{
    DialogButtons, DialogIcon, DialogOptions, DialogPrompt, DialogResult, WindowHandle,
};
